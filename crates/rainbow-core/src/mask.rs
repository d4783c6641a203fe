//! Binary masks stored as 0/255 bytes so they can be dumped as grey images.

pub const MASK_ON: u8 = 255;
pub const MASK_OFF: u8 = 0;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>, // row-major, len = w*h
}

impl Mask {
    /// All-false mask.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![MASK_OFF; width * height],
        }
    }

    /// Build a mask from a per-pixel predicate.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(if f(x, y) { MASK_ON } else { MASK_OFF });
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Out-of-bounds coordinates read as false.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.data[y as usize * self.width + x as usize] != MASK_OFF
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.data[y * self.width + x] = if on { MASK_ON } else { MASK_OFF };
    }

    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != MASK_OFF).count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == MASK_OFF)
    }

    /// Pixel-wise OR. Both masks must have the same size.
    pub fn union_with(&mut self, other: &Mask) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a |= b;
        }
    }
}
