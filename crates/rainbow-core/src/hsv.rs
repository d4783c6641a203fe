use serde::{Deserialize, Serialize};

/// Encoding of the circular hue axis.
///
/// Every stage of the pipeline must agree on the scale: the HSV conversion
/// that fills an [`HsvImage`](crate::HsvImage) and the thresholds applied to it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueScale {
    /// Half-degree units in `[0, 180)`, as produced by OpenCV for 8-bit images.
    #[default]
    Half,
    /// Full degrees in `[0, 360)`.
    Full,
}

impl HueScale {
    /// Upper bound of the hue axis (exclusive for pixel values, inclusive for
    /// threshold tests).
    pub const fn max(self) -> u16 {
        match self {
            HueScale::Half => 180,
            HueScale::Full => 360,
        }
    }

    /// Map a hue in degrees `[0, 360)` onto this scale.
    #[inline]
    pub fn from_degrees(self, degrees: f32) -> u16 {
        let scaled = match self {
            HueScale::Half => degrees * 0.5,
            HueScale::Full => degrees,
        };
        let h = scaled.round() as u16;
        if h >= self.max() {
            0
        } else {
            h
        }
    }
}

/// One HSV pixel. Saturation and value are 8-bit; hue follows a [`HueScale`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Convert one 8-bit RGB triple to HSV.
///
/// `V = max(r, g, b)`, `S = 255 * (max - min) / max`, hue in degrees scaled
/// by `scale`. Grey pixels get hue 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8, scale: HueScale) -> Hsv {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let s = if max > 0.0 {
        (255.0 * delta / max).round() as u8
    } else {
        0
    };

    let degrees = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / delta
    } else if max == gf {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };

    Hsv {
        h: scale.from_degrees(degrees),
        s,
        v: max as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_on_half_scale() {
        assert_eq!(rgb_to_hsv(255, 0, 0, HueScale::Half), Hsv::new(0, 255, 255));
        assert_eq!(rgb_to_hsv(0, 255, 0, HueScale::Half), Hsv::new(60, 255, 255));
        assert_eq!(rgb_to_hsv(0, 0, 255, HueScale::Half), Hsv::new(120, 255, 255));
        assert_eq!(rgb_to_hsv(255, 255, 0, HueScale::Half), Hsv::new(30, 255, 255));
    }

    #[test]
    fn primaries_on_full_scale() {
        assert_eq!(rgb_to_hsv(0, 255, 0, HueScale::Full).h, 120);
        assert_eq!(rgb_to_hsv(0, 0, 255, HueScale::Full).h, 240);
        assert_eq!(rgb_to_hsv(255, 0, 255, HueScale::Full).h, 300);
    }

    #[test]
    fn grey_has_no_hue_or_saturation() {
        let hsv = rgb_to_hsv(128, 128, 128, HueScale::Half);
        assert_eq!(hsv, Hsv::new(0, 0, 128));
        assert_eq!(rgb_to_hsv(0, 0, 0, HueScale::Half), Hsv::new(0, 0, 0));
    }

    #[test]
    fn hue_just_below_red_wraps_to_zero() {
        // 359.5 degrees rounds to 360 on the full scale, which is 0.
        assert_eq!(HueScale::Full.from_degrees(359.6), 0);
        assert_eq!(HueScale::Half.from_degrees(359.6), 0);
        // magenta-ish red sits at the top end of the axis
        let hsv = rgb_to_hsv(255, 0, 40, HueScale::Half);
        assert!(hsv.h > 170 && hsv.h < 180, "hue {}", hsv.h);
    }

    #[test]
    fn hue_scale_bounds() {
        assert_eq!(HueScale::default().max(), 180);
        assert_eq!(HueScale::Full.max(), 360);
    }
}
