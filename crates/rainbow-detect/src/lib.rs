//! Colored ball detection on HSV images.
//!
//! For each calibrated color:
//! 1. Build an inclusion mask from the color's HSV box ([`hsv_mask`]); hue
//!    ranges with `huemin > huemax` wrap around the end of the hue axis.
//! 2. Open the mask (erode, then dilate) to drop noise specks.
//! 3. Collect external connected regions and keep the one with the largest
//!    enclosed area.
//! 4. Report its minimum enclosing circle and moment centroid, unless the
//!    circle radius is at or below the minimum.
//!
//! ## Quickstart
//!
//! ```
//! use rainbow_core::{ColorImage, HsvImage, HueScale};
//! use rainbow_detect::{
//!     BallDetector, Calibration, ExtractorParams, FrameViews, HsvThresholds, Overlay,
//! };
//!
//! let rgb = ColorImage::new(64, 64);
//! let hsv = HsvImage::from_rgb(&rgb.view(), HueScale::Half);
//! let frame = FrameViews::new(rgb.view(), hsv.view()).unwrap();
//!
//! let calibration = Calibration::default()
//!     .with_color("red", HsvThresholds::new((170, 10), (100, 255), (100, 255)));
//! let detector = BallDetector::new(calibration, ExtractorParams::default());
//!
//! let mut overlays: Vec<Overlay> = Vec::new();
//! let results = detector.detect_all(&frame, &mut overlays);
//! assert!(results[0].ball().is_none());
//! ```

pub mod contour;
pub mod enclosing_circle;
pub mod morphology;

mod calibration;
mod detector;
mod error;
mod extract;
mod frame;
mod overlay;
mod probe;
mod threshold;

pub use calibration::{Calibration, CalibrationIoError};
pub use detector::{found_balls, BallDetection, BallDetector, ColorResult};
pub use enclosing_circle::Circle;
pub use error::DetectError;
pub use extract::{
    largest_contour, BlobExtractor, DetectedBall, ExtractorParams, MIN_BALL_RADIUS,
    MORPH_ITERATIONS,
};
pub use frame::FrameViews;
pub use overlay::{
    overlays_for, Overlay, OverlaySink, CENTROID_COLOR, CENTROID_RADIUS, CIRCLE_COLOR,
    CIRCLE_THICKNESS,
};
pub use probe::{probe_pixel, PixelProbe};
pub use threshold::{hsv_mask, HsvThresholds};
