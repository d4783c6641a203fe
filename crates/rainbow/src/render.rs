//! Draw overlays onto an `image::RgbImage`.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};

use crate::detector::{Overlay, OverlaySink};

/// Overlay sink that rasterises straight into an RGB image.
pub struct RgbCanvas<'a> {
    img: &'a mut RgbImage,
}

impl<'a> RgbCanvas<'a> {
    pub fn new(img: &'a mut RgbImage) -> Self {
        Self { img }
    }
}

impl OverlaySink for RgbCanvas<'_> {
    fn draw(&mut self, overlay: &Overlay) {
        draw_overlay(self.img, overlay);
    }
}

pub fn draw_overlay(img: &mut RgbImage, overlay: &Overlay) {
    match *overlay {
        Overlay::Circle {
            center,
            radius,
            color,
            thickness,
        } => {
            // rings centred on `radius`, e.g. r-1 and r for thickness 2
            let inner = radius - (thickness as i32) / 2;
            for k in 0..thickness as i32 {
                let r = inner + k;
                if r >= 0 {
                    draw_hollow_circle_mut(img, (center.x, center.y), r, Rgb(color));
                }
            }
        }
        Overlay::Marker {
            center,
            radius,
            color,
        } => draw_filled_circle_mut(img, (center.x, center.y), radius, Rgb(color)),
    }
}
