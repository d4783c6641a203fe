/// Errors surfaced by the detection core.
///
/// None of these are transient; the caller decides whether to abort the run
/// or skip the affected color.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("selected region has zero area")]
    EmptyRegion,

    #[error(
        "color view is {color_width}x{color_height} but HSV view is {hsv_width}x{hsv_height}"
    )]
    DimensionMismatch {
        color_width: usize,
        color_height: usize,
        hsv_width: usize,
        hsv_height: usize,
    },

    #[error("no calibration entry for color {0:?}")]
    MissingColor(String),
}
