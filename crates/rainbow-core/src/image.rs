use crate::hsv::{rgb_to_hsv, Hsv, HueScale};

/// Borrowed RGB image, row-major, 3 bytes per pixel.
#[derive(Clone, Copy, Debug)]
pub struct ColorImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // len = w*h*3
}

#[derive(Clone, Debug)]
pub struct ColorImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl ColorImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 3],
        }
    }

    pub fn view(&self) -> ColorImageView<'_> {
        ColorImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn put(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = (y * self.width + x) * 3;
        self.data[i..i + 3].copy_from_slice(&rgb);
    }
}

impl ColorImageView<'_> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

/// Borrowed HSV image, row-major.
#[derive(Clone, Copy, Debug)]
pub struct HsvImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub scale: HueScale,
    pub data: &'a [Hsv], // len = w*h
}

#[derive(Clone, Debug)]
pub struct HsvImage {
    pub width: usize,
    pub height: usize,
    pub scale: HueScale,
    pub data: Vec<Hsv>,
}

impl HsvImage {
    /// Image filled with a single value.
    pub fn filled(width: usize, height: usize, scale: HueScale, px: Hsv) -> Self {
        Self {
            width,
            height,
            scale,
            data: vec![px; width * height],
        }
    }

    /// Convert an RGB view pixel by pixel.
    pub fn from_rgb(src: &ColorImageView<'_>, scale: HueScale) -> Self {
        let data = src
            .data
            .chunks_exact(3)
            .map(|p| rgb_to_hsv(p[0], p[1], p[2], scale))
            .collect();
        Self {
            width: src.width,
            height: src.height,
            scale,
            data,
        }
    }

    pub fn view(&self) -> HsvImageView<'_> {
        HsvImageView {
            width: self.width,
            height: self.height,
            scale: self.scale,
            data: &self.data,
        }
    }

    #[inline]
    pub fn put(&mut self, x: usize, y: usize, px: Hsv) {
        self.data[y * self.width + x] = px;
    }
}

impl HsvImageView<'_> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Hsv> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }
}
