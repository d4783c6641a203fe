//! Minimum enclosing circle of a point set.
//!
//! The convex hull is computed first (monotone chain), then the incremental
//! Welzl construction runs over the hull vertices only.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

const EPS: f64 = 1e-7;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2<f32>,
    pub radius: f32,
}

#[derive(Clone, Copy)]
struct Disk {
    cx: f64,
    cy: f64,
    r: f64,
}

impl Disk {
    fn contains(&self, p: (f64, f64)) -> bool {
        let (dx, dy) = (p.0 - self.cx, p.1 - self.cy);
        (dx * dx + dy * dy).sqrt() <= self.r + EPS * self.r.max(1.0)
    }

    fn from_two(a: (f64, f64), b: (f64, f64)) -> Self {
        let (cx, cy) = (0.5 * (a.0 + b.0), 0.5 * (a.1 + b.1));
        Self {
            cx,
            cy,
            r: 0.5 * (a.0 - b.0).hypot(a.1 - b.1),
        }
    }

    fn from_three(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Self {
        let (bx, by) = (b.0 - a.0, b.1 - a.1);
        let (cx, cy) = (c.0 - a.0, c.1 - a.1);
        let d = 2.0 * (bx * cy - by * cx);
        if d.abs() < EPS {
            // collinear: the farthest pair spans the circle
            return [Self::from_two(a, b), Self::from_two(a, c), Self::from_two(b, c)]
                .into_iter()
                .max_by(|l, r| l.r.total_cmp(&r.r))
                .unwrap_or_else(|| Self::from_two(a, b));
        }
        let b2 = bx * bx + by * by;
        let c2 = cx * cx + cy * cy;
        let ux = (cy * b2 - by * c2) / d;
        let uy = (bx * c2 - cx * b2) / d;
        Self {
            cx: a.0 + ux,
            cy: a.1 + uy,
            r: ux.hypot(uy),
        }
    }
}

/// Smallest circle containing every point. `None` for an empty slice.
pub fn min_enclosing_circle(points: &[(i32, i32)]) -> Option<Circle> {
    let hull = convex_hull(points);
    let first = *hull.first()?;

    let mut disk = Disk {
        cx: first.0,
        cy: first.1,
        r: 0.0,
    };
    for i in 1..hull.len() {
        if disk.contains(hull[i]) {
            continue;
        }
        disk = Disk {
            cx: hull[i].0,
            cy: hull[i].1,
            r: 0.0,
        };
        for j in 0..i {
            if disk.contains(hull[j]) {
                continue;
            }
            disk = Disk::from_two(hull[i], hull[j]);
            for k in 0..j {
                if !disk.contains(hull[k]) {
                    disk = Disk::from_three(hull[i], hull[j], hull[k]);
                }
            }
        }
    }

    Some(Circle {
        center: Point2::new(disk.cx as f32, disk.cy as f32),
        radius: disk.r as f32,
    })
}

/// Andrew's monotone chain; collinear points are dropped.
fn convex_hull(points: &[(i32, i32)]) -> Vec<(f64, f64)> {
    let mut pts: Vec<(i64, i64)> = points.iter().map(|&(x, y)| (x as i64, y as i64)).collect();
    pts.sort_unstable();
    pts.dedup();
    if pts.len() < 3 {
        return pts.into_iter().map(|(x, y)| (x as f64, y as f64)).collect();
    }

    let cross = |o: (i64, i64), a: (i64, i64), b: (i64, i64)| {
        (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
    };

    let mut hull: Vec<(i64, i64)> = Vec::with_capacity(2 * pts.len());
    for &p in pts.iter() {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull.into_iter().map(|(x, y)| (x as f64, y as f64)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_input_has_no_circle() {
        assert!(min_enclosing_circle(&[]).is_none());
    }

    #[test]
    fn single_point_has_zero_radius() {
        let c = min_enclosing_circle(&[(4, 7)]).expect("circle");
        assert_eq!(c.center, Point2::new(4.0, 7.0));
        assert_eq!(c.radius, 0.0);
    }

    #[test]
    fn two_points_span_a_diameter() {
        let c = min_enclosing_circle(&[(0, 0), (6, 8)]).expect("circle");
        assert_abs_diff_eq!(c.center.x, 3.0);
        assert_abs_diff_eq!(c.center.y, 4.0);
        assert_abs_diff_eq!(c.radius, 5.0);
    }

    #[test]
    fn collinear_points_use_the_extremes() {
        let c = min_enclosing_circle(&[(0, 0), (3, 0), (10, 0), (5, 0)]).expect("circle");
        assert_abs_diff_eq!(c.center.x, 5.0);
        assert_abs_diff_eq!(c.center.y, 0.0);
        assert_abs_diff_eq!(c.radius, 5.0);
    }

    #[test]
    fn square_corners_define_circumcircle() {
        let pts = [(0, 0), (10, 0), (10, 10), (0, 10), (5, 5), (2, 8)];
        let c = min_enclosing_circle(&pts).expect("circle");
        assert_abs_diff_eq!(c.center.x, 5.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.center.y, 5.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.radius, 50f32.sqrt(), epsilon = 1e-4);
    }

    #[test]
    fn obtuse_triangle_uses_longest_side() {
        let c = min_enclosing_circle(&[(0, 0), (20, 0), (10, 2)]).expect("circle");
        assert_abs_diff_eq!(c.center.x, 10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.center.y, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.radius, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn sampled_circle_is_recovered_and_contains_all_points() {
        let pts: Vec<(i32, i32)> = (0..360)
            .step_by(7)
            .map(|deg| {
                let t = (deg as f64).to_radians();
                ((40.0 + 25.0 * t.cos()).round() as i32, (30.0 + 25.0 * t.sin()).round() as i32)
            })
            .collect();
        let c = min_enclosing_circle(&pts).expect("circle");
        assert!((c.radius - 25.0).abs() < 1.0, "radius {}", c.radius);
        assert!((c.center.x - 40.0).abs() < 1.0 && (c.center.y - 30.0).abs() < 1.0);
        for &(x, y) in &pts {
            let d = ((x as f32 - c.center.x).powi(2) + (y as f32 - c.center.y).powi(2)).sqrt();
            assert!(d <= c.radius + 1e-3);
        }
    }
}
