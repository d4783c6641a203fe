use std::fmt;

use rainbow_core::Hsv;
use serde::Serialize;

use crate::frame::FrameViews;

/// Pixel values under a probe point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PixelProbe {
    pub x: usize,
    pub y: usize,
    pub rgb: [u8; 3],
    pub hsv: Hsv,
}

impl fmt::Display for PixelProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}, {}, {}]",
            self.x, self.y, self.hsv.h, self.hsv.s, self.hsv.v
        )
    }
}

/// Read both views at `(x, y)`. Out of bounds yields `None`.
pub fn probe_pixel(frame: &FrameViews<'_>, x: usize, y: usize) -> Option<PixelProbe> {
    Some(PixelProbe {
        x,
        y,
        rgb: frame.color.get(x, y)?,
        hsv: frame.hsv.get(x, y)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rainbow_core::{ColorImage, HsvImage, HueScale};

    #[test]
    fn probe_reports_both_views() {
        let mut rgb = ColorImage::new(4, 4);
        rgb.put(1, 2, [0, 255, 0]);
        let hsv = HsvImage::from_rgb(&rgb.view(), HueScale::Half);
        let frame = FrameViews::new(rgb.view(), hsv.view()).expect("frame");

        let p = probe_pixel(&frame, 1, 2).expect("in bounds");
        assert_eq!(p.rgb, [0, 255, 0]);
        assert_eq!(p.hsv, Hsv::new(60, 255, 255));
        assert_eq!(p.to_string(), "1 2 [60, 255, 255]");
        assert!(probe_pixel(&frame, 4, 0).is_none());
    }
}
