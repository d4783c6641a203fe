//! HSV box thresholding with circular hue.

use rainbow_core::{HsvImageView, Mask, MASK_OFF, MASK_ON};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Inclusive HSV box for one ball color.
///
/// `huemin > huemax` means the range crosses the hue wrap point, e.g. red
/// spanning `[170, 180] ∪ [0, 10]` on the half-degree scale. Saturation and
/// value never wrap; `min > max` on those axes simply selects nothing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HsvThresholds {
    pub huemin: i32,
    pub huemax: i32,
    pub satmin: i32,
    pub satmax: i32,
    pub valmin: i32,
    pub valmax: i32,
}

impl HsvThresholds {
    pub const fn new(hue: (i32, i32), sat: (i32, i32), val: (i32, i32)) -> Self {
        Self {
            huemin: hue.0,
            huemax: hue.1,
            satmin: sat.0,
            satmax: sat.1,
            valmin: val.0,
            valmax: val.1,
        }
    }

    /// True when the hue range crosses the wrap point.
    pub fn wraps(&self) -> bool {
        self.huemin > self.huemax
    }
}

/// Build the inclusion mask for `thresholds`.
///
/// The hue axis maximum comes from the view's [`HueScale`](rainbow_core::HueScale),
/// so thresholds are always interpreted in the same units as the pixels.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(hsv, thresholds), fields(width = hsv.width, height = hsv.height))
)]
pub fn hsv_mask(hsv: &HsvImageView<'_>, thresholds: &HsvThresholds) -> Mask {
    if !thresholds.wraps() {
        return in_range(hsv, thresholds.huemin, thresholds.huemax, thresholds);
    }
    let hue_max = hsv.scale.max() as i32;
    let mut mask = in_range(hsv, thresholds.huemin, hue_max, thresholds);
    mask.union_with(&in_range(hsv, 0, thresholds.huemax, thresholds));
    mask
}

fn in_range(hsv: &HsvImageView<'_>, h_lo: i32, h_hi: i32, t: &HsvThresholds) -> Mask {
    let data = hsv
        .data
        .iter()
        .map(|px| {
            let (h, s, v) = (px.h as i32, px.s as i32, px.v as i32);
            let inside = (h_lo..=h_hi).contains(&h)
                && (t.satmin..=t.satmax).contains(&s)
                && (t.valmin..=t.valmax).contains(&v);
            if inside {
                MASK_ON
            } else {
                MASK_OFF
            }
        })
        .collect();
    Mask {
        width: hsv.width,
        height: hsv.height,
        data,
    }
}
