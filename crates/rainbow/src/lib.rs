//! High-level facade for the `rainbow-*` crates.
//!
//! This crate provides:
//! - re-exports of the image primitives and the detection core
//! - (feature-gated) helpers that decode an image with the `image` crate,
//!   optionally rescale it, convert it to HSV, and render overlays back
//!   onto it.
//!
//! ## Quickstart
//!
//! ```no_run
//! use rainbow::detect;
//! use rainbow::detector::{BallDetector, Calibration, ExtractorParams};
//! use rainbow::core::HueScale;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let calibration = Calibration::load_json("calibration.json")?;
//! let detector = BallDetector::new(calibration, ExtractorParams::default());
//!
//! let img = detect::load_rgb("balls.jpg")?;
//! let frame = detect::prepare_frame(img, Some(600), HueScale::Half)?;
//! let (results, annotated) = detect::detect_and_annotate(frame, &detector, None)?;
//! for r in &results {
//!     println!("{}: {:?}", r.color, r.ball());
//! }
//! annotated.save("annotated.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `rainbow::core`: RGB/HSV images, masks, hue scale, logger.
//! - `rainbow::detector`: thresholds, blob extraction, calibration, overlays.
//! - `rainbow::detect` (feature `image`): end-to-end helpers on `image::RgbImage`.
//! - `rainbow::render` (feature `image`): overlay rasterisation via `imageproc`.

pub use rainbow_core as core;
pub use rainbow_detect as detector;

pub use nalgebra::Point2;
pub use rainbow_core::{HueScale, Mask};
pub use rainbow_detect::{BallDetector, Calibration, DetectError, DetectedBall, HsvThresholds};

#[cfg(feature = "image")]
pub mod detect;
#[cfg(feature = "image")]
pub mod render;
