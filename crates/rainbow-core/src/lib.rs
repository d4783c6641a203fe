//! Core image primitives for colored ball detection.
//!
//! This crate is intentionally small. It knows about pixel buffers (RGB,
//! HSV, binary masks) and the hue convention tying them together, but
//! nothing about thresholds, blobs, or image decoding.

mod hsv;
mod image;
mod logger;
mod mask;

pub use hsv::{rgb_to_hsv, Hsv, HueScale};
pub use image::{ColorImage, ColorImageView, HsvImage, HsvImageView};
pub use mask::{Mask, MASK_OFF, MASK_ON};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
