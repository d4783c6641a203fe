use rainbow_core::{ColorImageView, HsvImageView};

use crate::error::DetectError;

/// The two views of one image: RGB for annotation, HSV for masking.
#[derive(Clone, Copy, Debug)]
pub struct FrameViews<'a> {
    pub color: ColorImageView<'a>,
    pub hsv: HsvImageView<'a>,
}

impl<'a> FrameViews<'a> {
    /// Pair the views, rejecting differing dimensions.
    pub fn new(color: ColorImageView<'a>, hsv: HsvImageView<'a>) -> Result<Self, DetectError> {
        if color.width != hsv.width || color.height != hsv.height {
            return Err(DetectError::DimensionMismatch {
                color_width: color.width,
                color_height: color.height,
                hsv_width: hsv.width,
                hsv_height: hsv.height,
            });
        }
        Ok(Self { color, hsv })
    }

    pub fn width(&self) -> usize {
        self.hsv.width
    }

    pub fn height(&self) -> usize {
        self.hsv.height
    }
}
