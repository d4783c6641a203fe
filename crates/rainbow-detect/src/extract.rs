//! Largest-blob extraction from an inclusion mask.

use nalgebra::Point2;
use rainbow_core::Mask;
use serde::{Deserialize, Serialize};

use crate::contour::{find_external_contours, Contour};
use crate::enclosing_circle::min_enclosing_circle;
use crate::error::DetectError;
use crate::morphology::{dilate, erode};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Erosion and dilation passes applied before region search.
pub const MORPH_ITERATIONS: usize = 2;
/// Enclosing circles with a radius at or below this are not reported.
pub const MIN_BALL_RADIUS: f32 = 10.0;

/// Fixed extractor configuration. Missing fields take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorParams {
    pub erode_iterations: usize,
    pub dilate_iterations: usize,
    pub min_radius: f32,
}

impl Default for ExtractorParams {
    fn default() -> Self {
        Self {
            erode_iterations: MORPH_ITERATIONS,
            dilate_iterations: MORPH_ITERATIONS,
            min_radius: MIN_BALL_RADIUS,
        }
    }
}

/// One ball found in a mask.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedBall {
    /// Minimum enclosing circle center.
    pub center: Point2<f32>,
    /// Minimum enclosing circle radius.
    pub radius: f32,
    /// Moment centroid, truncated to integers.
    pub centroid: Point2<i32>,
}

pub struct BlobExtractor {
    params: ExtractorParams,
}

impl Default for BlobExtractor {
    fn default() -> Self {
        Self::new(ExtractorParams::default())
    }
}

impl BlobExtractor {
    pub fn new(params: ExtractorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ExtractorParams {
        &self.params
    }

    /// Morphological opening with the configured iteration counts.
    pub fn clean(&self, mask: &Mask) -> Mask {
        let eroded = erode(mask, self.params.erode_iterations);
        dilate(&eroded, self.params.dilate_iterations)
    }

    /// Return the largest region of `mask` as a ball, or `None` when the
    /// mask is empty after cleanup or the region is too small.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, mask), fields(width = mask.width, height = mask.height))
    )]
    pub fn extract(&self, mask: &Mask) -> Result<Option<DetectedBall>, DetectError> {
        let cleaned = self.clean(mask);
        let contours = find_external_contours(&cleaned);
        let Some(largest) = largest_contour(&contours) else {
            log::debug!("no regions left after cleanup");
            return Ok(None);
        };

        let circle = min_enclosing_circle(&largest.points).ok_or(DetectError::EmptyRegion)?;
        let (cx, cy) = largest
            .moments()
            .centroid()
            .ok_or(DetectError::EmptyRegion)?;

        if circle.radius <= self.params.min_radius {
            log::debug!(
                "largest region of {} px has radius {:.1}, below {:.1}",
                largest.pixel_count,
                circle.radius,
                self.params.min_radius
            );
            return Ok(None);
        }

        Ok(Some(DetectedBall {
            center: circle.center,
            radius: circle.radius,
            centroid: Point2::new(cx as i32, cy as i32),
        }))
    }
}

/// Largest contour by enclosed area; the first one wins ties.
pub fn largest_contour(contours: &[Contour]) -> Option<&Contour> {
    let mut best: Option<(&Contour, f64)> = None;
    for c in contours {
        let area = c.area();
        if best.map(|(_, a)| area > a).unwrap_or(true) {
            best = Some((c, area));
        }
    }
    best.map(|(c, _)| c)
}
