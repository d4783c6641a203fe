//! Binary erosion and dilation with a 3x3 square neighbourhood.
//!
//! Pixels outside the image never take part: erosion does not eat regions
//! touching the border and dilation does not grow from outside.

use rainbow_core::{Mask, MASK_OFF, MASK_ON};

#[derive(Clone, Copy)]
enum Op {
    Erode,
    Dilate,
}

/// Erode `iterations` times.
pub fn erode(mask: &Mask, iterations: usize) -> Mask {
    repeat(mask, iterations, Op::Erode)
}

/// Dilate `iterations` times.
pub fn dilate(mask: &Mask, iterations: usize) -> Mask {
    repeat(mask, iterations, Op::Dilate)
}

/// Morphological opening: erode then dilate, same count.
pub fn open(mask: &Mask, iterations: usize) -> Mask {
    dilate(&erode(mask, iterations), iterations)
}

fn repeat(mask: &Mask, iterations: usize, op: Op) -> Mask {
    let mut out = mask.clone();
    for _ in 0..iterations {
        // the square neighbourhood is separable: one row pass, one column pass
        let rows = pass(&out, op, 1, 0);
        out = pass(&rows, op, 0, 1);
    }
    out
}

fn pass(src: &Mask, op: Op, dx: i32, dy: i32) -> Mask {
    let (w, h) = (src.width, src.height);
    let mut data = Vec::with_capacity(w * h);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let mut on = matches!(op, Op::Erode);
            for k in -1..=1 {
                let (nx, ny) = (x + k * dx, y + k * dy);
                if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                    continue;
                }
                let v = src.get(nx, ny);
                match op {
                    Op::Erode => on &= v,
                    Op::Dilate => on |= v,
                }
            }
            data.push(if on { MASK_ON } else { MASK_OFF });
        }
    }
    Mask {
        width: w,
        height: h,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: usize, x0: usize, y0: usize, side: usize) -> Mask {
        Mask::from_fn(size, size, |x, y| {
            (x0..x0 + side).contains(&x) && (y0..y0 + side).contains(&y)
        })
    }

    #[test]
    fn erode_shrinks_square_by_one_per_iteration() {
        let m = square(20, 5, 5, 8);
        assert_eq!(erode(&m, 1), square(20, 6, 6, 6));
        assert_eq!(erode(&m, 2), square(20, 7, 7, 4));
    }

    #[test]
    fn dilate_grows_square_by_one_per_iteration() {
        let m = square(20, 5, 5, 4);
        assert_eq!(dilate(&m, 2), square(20, 3, 3, 8));
    }

    #[test]
    fn opening_removes_specks_and_restores_large_squares() {
        let mut m = square(30, 10, 10, 10);
        m.set(2, 2, true);
        m.set(3, 2, true);
        m.set(25, 25, true);
        let opened = open(&m, 2);
        assert_eq!(opened, square(30, 10, 10, 10));
    }

    #[test]
    fn border_pixels_survive_erosion() {
        let full = Mask::from_fn(5, 5, |_, _| true);
        assert_eq!(erode(&full, 2), full);
    }

    #[test]
    fn empty_mask_stays_empty() {
        let m = Mask::new(8, 8);
        assert!(open(&m, 2).is_empty());
        assert!(dilate(&m, 3).is_empty());
    }
}
