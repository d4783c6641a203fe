use serde::{Deserialize, Serialize};

use crate::calibration::Calibration;
use crate::error::DetectError;
use crate::extract::{BlobExtractor, DetectedBall, ExtractorParams};
use crate::frame::FrameViews;
use crate::overlay::{overlays_for, OverlaySink};
use crate::threshold::hsv_mask;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Outcome for one requested color.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorResult {
    pub color: String,
    pub result: Result<Option<DetectedBall>, DetectError>,
}

impl ColorResult {
    pub fn ball(&self) -> Option<&DetectedBall> {
        self.result.as_ref().ok()?.as_ref()
    }
}

/// Successful detection, tagged with its color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BallDetection {
    pub color: String,
    pub ball: DetectedBall,
}

/// Runs threshold masking and blob extraction for each calibrated color.
pub struct BallDetector {
    calibration: Calibration,
    extractor: BlobExtractor,
}

impl BallDetector {
    pub fn new(calibration: Calibration, params: ExtractorParams) -> Self {
        Self {
            calibration,
            extractor: BlobExtractor::new(params),
        }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn params(&self) -> &ExtractorParams {
        self.extractor.params()
    }

    /// Detect a single color, without drawing anything.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, frame), fields(width = frame.width(), height = frame.height()))
    )]
    pub fn detect_color(
        &self,
        frame: &FrameViews<'_>,
        color: &str,
    ) -> Result<Option<DetectedBall>, DetectError> {
        let thresholds = self.calibration.thresholds(color)?;
        log::debug!("looking for {color} ball with {thresholds:?}");
        let mask = hsv_mask(&frame.hsv, thresholds);
        self.extractor.extract(&mask)
    }

    /// Detect each color in order. Overlays for a ball go to `sink` right
    /// after that color's detection, so later colors draw on top.
    pub fn detect_colors<S>(
        &self,
        frame: &FrameViews<'_>,
        colors: &[&str],
        sink: &mut S,
    ) -> Vec<ColorResult>
    where
        S: OverlaySink + ?Sized,
    {
        colors
            .iter()
            .map(|&color| {
                let result = self.detect_color(frame, color);
                match &result {
                    Ok(Some(ball)) => {
                        log::info!(
                            "{color} ball at ({:.1}, {:.1}) r={:.1}",
                            ball.center.x,
                            ball.center.y,
                            ball.radius
                        );
                        for overlay in &overlays_for(ball) {
                            sink.draw(overlay);
                        }
                    }
                    Ok(None) => log::info!("{color} ball not found"),
                    Err(err) => log::warn!("{color}: {err}"),
                }
                ColorResult {
                    color: color.to_string(),
                    result,
                }
            })
            .collect()
    }

    /// Detect every calibrated color, in name order.
    pub fn detect_all<S>(&self, frame: &FrameViews<'_>, sink: &mut S) -> Vec<ColorResult>
    where
        S: OverlaySink + ?Sized,
    {
        let colors: Vec<&str> = self.calibration.colors().collect();
        self.detect_colors(frame, &colors, sink)
    }
}

/// Keep only found balls.
pub fn found_balls(results: &[ColorResult]) -> Vec<BallDetection> {
    results
        .iter()
        .filter_map(|r| {
            Some(BallDetection {
                color: r.color.clone(),
                ball: *r.ball()?,
            })
        })
        .collect()
}
