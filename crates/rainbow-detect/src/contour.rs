//! External connected regions of a binary mask.
//!
//! Foreground is 8-connected and background 4-connected. A region counts as
//! external when its first pixel in raster order touches background that is
//! reachable from the image border; regions sitting inside another region's
//! hole are dropped, and holes never produce regions of their own.

use std::collections::VecDeque;

use rainbow_core::Mask;

/// Neighbour offsets in screen-clockwise order (y grows downwards), starting east.
const DIRS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];
const WEST: usize = 4;

/// Outer boundary of one connected region.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    /// Boundary pixels in traversal order; a pixel may repeat on thin parts.
    pub points: Vec<(i32, i32)>,
    /// Number of mask pixels in the region, holes excluded.
    pub pixel_count: usize,
}

/// Zeroth and first order spatial moments.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

impl Moments {
    /// `(m10 / m00, m01 / m00)`, or `None` for a zero-area region.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.m00 == 0.0 {
            return None;
        }
        Some((self.m10 / self.m00, self.m01 / self.m00))
    }
}

impl Contour {
    /// Area enclosed by the boundary polygon.
    pub fn area(&self) -> f64 {
        self.moments().m00
    }

    /// Polygon moments of the boundary (Green's theorem), oriented so that
    /// `m00 >= 0`.
    pub fn moments(&self) -> Moments {
        let n = self.points.len();
        if n < 3 {
            return Moments::default();
        }
        let (mut a, mut sx, mut sy) = (0.0f64, 0.0f64, 0.0f64);
        for i in 0..n {
            let (x0, y0) = self.points[i];
            let (x1, y1) = self.points[(i + 1) % n];
            let (x0, y0, x1, y1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);
            let cross = x0 * y1 - x1 * y0;
            a += cross;
            sx += (x0 + x1) * cross;
            sy += (y0 + y1) * cross;
        }
        let sign = if a < 0.0 { -1.0 } else { 1.0 };
        Moments {
            m00: sign * a / 2.0,
            m10: sign * sx / 6.0,
            m01: sign * sy / 6.0,
        }
    }
}

/// Find the outer contours of all external regions, in raster order of
/// their first pixel.
pub fn find_external_contours(mask: &Mask) -> Vec<Contour> {
    let regions = label_regions(mask);
    if regions.is_empty() {
        return Vec::new();
    }
    let outside = border_background(mask);
    let w = mask.width;

    regions
        .into_iter()
        .filter(|r| {
            let (x, y) = r.start;
            x == 0 || outside[y as usize * w + x as usize - 1]
        })
        .map(|r| Contour {
            points: trace_outer_border(mask, r.start),
            pixel_count: r.pixel_count,
        })
        .collect()
}

struct Region {
    start: (i32, i32),
    pixel_count: usize,
}

fn label_regions(mask: &Mask) -> Vec<Region> {
    let (w, h) = (mask.width, mask.height);
    let mut seen = vec![false; w * h];
    let mut regions = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            if seen[idx] || !mask.get(x as i32, y as i32) {
                continue;
            }
            seen[idx] = true;
            queue.push_back((x as i32, y as i32));
            let mut pixel_count = 0usize;
            while let Some((cx, cy)) = queue.pop_front() {
                pixel_count += 1;
                for (dx, dy) in DIRS {
                    let (nx, ny) = (cx + dx, cy + dy);
                    if !mask.get(nx, ny) {
                        continue;
                    }
                    let n = ny as usize * w + nx as usize;
                    if !seen[n] {
                        seen[n] = true;
                        queue.push_back((nx, ny));
                    }
                }
            }
            regions.push(Region {
                start: (x as i32, y as i32),
                pixel_count,
            });
        }
    }
    regions
}

/// Background pixels 4-connected to the image border.
fn border_background(mask: &Mask) -> Vec<bool> {
    let (w, h) = (mask.width as i32, mask.height as i32);
    let mut outside = vec![false; mask.width * mask.height];
    let mut queue = VecDeque::new();

    let seed = |x: i32, y: i32, outside: &mut [bool], queue: &mut VecDeque<(i32, i32)>| {
        let i = (y * w + x) as usize;
        if !mask.get(x, y) && !outside[i] {
            outside[i] = true;
            queue.push_back((x, y));
        }
    };
    for x in 0..w {
        seed(x, 0, &mut outside, &mut queue);
        seed(x, h - 1, &mut outside, &mut queue);
    }
    for y in 0..h {
        seed(0, y, &mut outside, &mut queue);
        seed(w - 1, y, &mut outside, &mut queue);
    }

    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || ny < 0 || nx >= w || ny >= h {
                continue;
            }
            seed(nx, ny, &mut outside, &mut queue);
        }
    }
    outside
}

/// Border following from the region's first raster pixel, entered from
/// the west (which is always background there).
fn trace_outer_border(mask: &Mask, start: (i32, i32)) -> Vec<(i32, i32)> {
    let step = |p: (i32, i32), d: usize| (p.0 + DIRS[d].0, p.1 + DIRS[d].1);

    let Some(p1) = (0..8)
        .map(|k| step(start, (WEST + k) % 8))
        .find(|&(x, y)| mask.get(x, y))
    else {
        return vec![start];
    };

    let mut points = Vec::new();
    let (mut prev, mut cur) = (p1, start);
    loop {
        // counter-clockwise around `cur`, starting just past `prev`
        let back = direction(cur, prev);
        let next = (1..=8)
            .map(|k| step(cur, (back + 8 - k) % 8))
            .find(|&(x, y)| mask.get(x, y))
            .unwrap_or(prev);
        points.push(cur);
        if next == start && cur == p1 {
            break;
        }
        prev = cur;
        cur = next;
    }
    points
}

fn direction(from: (i32, i32), to: (i32, i32)) -> usize {
    let delta = (to.0 - from.0, to.1 - from.1);
    DIRS.iter().position(|&d| d == delta).unwrap_or(0)
}
