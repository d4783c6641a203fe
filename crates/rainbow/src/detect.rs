//! End-to-end helpers from an `image::RgbImage`.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageReader, RgbImage};

use crate::core::{ColorImageView, HsvImage, HueScale};
use crate::detector::{BallDetector, ColorResult, DetectError, FrameViews};
use crate::render::RgbCanvas;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced while turning a file into detection-ready views.
#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("invalid target width {0}")]
    InvalidWidth(u32),

    #[error(transparent)]
    Detect(#[from] DetectError),
}

/// Decoded RGB image together with its HSV conversion.
#[derive(Clone, Debug)]
pub struct PreparedFrame {
    pub rgb: RgbImage,
    pub hsv: HsvImage,
}

impl PreparedFrame {
    pub fn views(&self) -> Result<FrameViews<'_>, DetectError> {
        FrameViews::new(color_view(&self.rgb), self.hsv.view())
    }
}

/// Convert an `image::RgbImage` into the lightweight `rainbow-core` view type.
pub fn color_view(img: &RgbImage) -> ColorImageView<'_> {
    ColorImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

#[cfg_attr(feature = "tracing", instrument(level = "info", skip(path)))]
pub fn load_rgb(path: impl AsRef<Path>) -> Result<RgbImage, FrameError> {
    Ok(ImageReader::open(path)?.decode()?.to_rgb8())
}

/// Resize to `width`, keeping the aspect ratio (linear filtering).
pub fn scale_to_width(img: &RgbImage, width: u32) -> Result<RgbImage, FrameError> {
    if width == 0 || img.width() == 0 {
        return Err(FrameError::InvalidWidth(width));
    }
    if img.width() == width {
        return Ok(img.clone());
    }
    let factor = width as f64 / img.width() as f64;
    let height = ((img.height() as f64 * factor).round() as u32).max(1);
    log::debug!(
        "scaling {}x{} by {:.3} to {}x{}",
        img.width(),
        img.height(),
        factor,
        width,
        height
    );
    Ok(imageops::resize(img, width, height, FilterType::Triangle))
}

/// Optionally rescale, then convert to HSV on `scale`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img), fields(width = img.width(), height = img.height()))
)]
pub fn prepare_frame(
    img: RgbImage,
    target_width: Option<u32>,
    scale: HueScale,
) -> Result<PreparedFrame, FrameError> {
    let rgb = match target_width {
        Some(w) => scale_to_width(&img, w)?,
        None => img,
    };
    let hsv = HsvImage::from_rgb(&color_view(&rgb), scale);
    log::info!("image {}x{}, hue scale {:?}", rgb.width(), rgb.height(), scale);
    Ok(PreparedFrame { rgb, hsv })
}

/// Run the detector on `colors` (all calibrated colors when `None`) and
/// return the results with the annotated RGB image.
///
/// Overlays are drawn onto a copy of the frame as each color is found, so
/// the views used for detection never see earlier annotations.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(frame, detector), fields(width = frame.rgb.width(), height = frame.rgb.height()))
)]
pub fn detect_and_annotate(
    frame: PreparedFrame,
    detector: &BallDetector,
    colors: Option<&[&str]>,
) -> Result<(Vec<ColorResult>, RgbImage), FrameError> {
    let views = frame.views()?;
    let mut annotated = frame.rgb.clone();
    let mut canvas = RgbCanvas::new(&mut annotated);
    let results = match colors {
        Some(colors) => detector.detect_colors(&views, colors, &mut canvas),
        None => detector.detect_all(&views, &mut canvas),
    };
    Ok((results, annotated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{
        Calibration, ExtractorParams, HsvThresholds, CENTROID_COLOR, CIRCLE_COLOR,
    };
    use approx::assert_abs_diff_eq;
    use image::Rgb;

    fn red_disk(w: u32, h: u32, cx: f32, cy: f32, r: f32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            let (dx, dy) = (x as f32 - cx, y as f32 - cy);
            if dx * dx + dy * dy <= r * r {
                Rgb([255, 0, 40])
            } else {
                Rgb([0, 0, 0])
            }
        })
    }

    #[test]
    fn scale_to_width_keeps_aspect_ratio() {
        let img = RgbImage::new(1200, 900);
        let scaled = scale_to_width(&img, 600).expect("scale");
        assert_eq!(scaled.dimensions(), (600, 450));
        assert!(matches!(
            scale_to_width(&img, 0),
            Err(FrameError::InvalidWidth(0))
        ));
    }

    #[test]
    fn prepare_frame_pairs_views() {
        let frame = prepare_frame(RgbImage::new(40, 30), None, HueScale::Full).expect("frame");
        let views = frame.views().expect("views");
        assert_eq!((views.width(), views.height()), (40, 30));
        assert_eq!(views.hsv.scale, HueScale::Full);
    }

    #[test]
    fn detect_and_annotate_marks_the_centroid() {
        let frame = prepare_frame(red_disk(120, 100, 60.0, 50.0, 20.0), None, HueScale::Half)
            .expect("frame");
        let calibration = Calibration::default()
            .with_color("red", HsvThresholds::new((170, 10), (100, 255), (100, 255)));
        let detector = BallDetector::new(calibration, ExtractorParams::default());

        let (results, annotated) = detect_and_annotate(frame, &detector, None).expect("detect");
        let ball = results[0].ball().expect("red ball");
        let c = ball.centroid;
        assert_eq!(annotated.get_pixel(c.x as u32, c.y as u32).0, CENTROID_COLOR);
    }

    #[test]
    fn scaled_frame_still_finds_the_ball() {
        let img = red_disk(400, 300, 200.0, 150.0, 60.0);
        let frame = prepare_frame(img, Some(200), HueScale::Half).expect("frame");
        let calibration = Calibration::default()
            .with_color("red", HsvThresholds::new((170, 10), (100, 255), (100, 255)));
        let detector = BallDetector::new(calibration, ExtractorParams::default());
        let (results, _) = detect_and_annotate(frame, &detector, Some(&["red"])).expect("detect");
        let ball = results[0].ball().expect("red ball");
        assert_abs_diff_eq!(ball.center.x, 100.0, epsilon = 2.0);
        assert_abs_diff_eq!(ball.center.y, 75.0, epsilon = 2.0);
        assert_abs_diff_eq!(ball.radius, 30.0, epsilon = 2.0);
    }

    #[test]
    fn annotation_does_not_leak_into_detection_input() {
        let frame = prepare_frame(red_disk(120, 100, 60.0, 50.0, 20.0), None, HueScale::Half)
            .expect("frame");
        let original = frame.rgb.clone();
        let calibration = Calibration::default()
            .with_color("red", HsvThresholds::new((170, 10), (100, 255), (100, 255)));
        let detector = BallDetector::new(calibration, ExtractorParams::default());

        // the same color twice: the second pass must see the untouched frame
        let (results, annotated) =
            detect_and_annotate(frame, &detector, Some(&["red", "red"])).expect("detect");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].result, results[1].result);
        assert_ne!(annotated, original);

        let ball = results[0].ball().expect("red ball");
        let rim_x = (ball.center.x as i32 + ball.radius as i32) as u32;
        assert_eq!(annotated.get_pixel(rim_x, ball.center.y as u32).0, CIRCLE_COLOR);
    }
}
