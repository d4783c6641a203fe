//! Annotation primitives handed to the renderer.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::extract::DetectedBall;

/// Enclosing circle outline color (RGB yellow).
pub const CIRCLE_COLOR: [u8; 3] = [255, 255, 0];
pub const CIRCLE_THICKNESS: u32 = 2;
/// Centroid marker color (RGB red).
pub const CENTROID_COLOR: [u8; 3] = [255, 0, 0];
pub const CENTROID_RADIUS: i32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Overlay {
    /// Circle outline.
    Circle {
        center: Point2<i32>,
        radius: i32,
        color: [u8; 3],
        thickness: u32,
    },
    /// Filled disk marker.
    Marker {
        center: Point2<i32>,
        radius: i32,
        color: [u8; 3],
    },
}

/// Receives overlays as soon as a detection is complete.
pub trait OverlaySink {
    fn draw(&mut self, overlay: &Overlay);
}

impl OverlaySink for Vec<Overlay> {
    fn draw(&mut self, overlay: &Overlay) {
        self.push(*overlay);
    }
}

/// Enclosing circle plus centroid marker for one ball.
pub fn overlays_for(ball: &DetectedBall) -> [Overlay; 2] {
    [
        Overlay::Circle {
            center: Point2::new(ball.center.x as i32, ball.center.y as i32),
            radius: ball.radius as i32,
            color: CIRCLE_COLOR,
            thickness: CIRCLE_THICKNESS,
        },
        Overlay::Marker {
            center: ball.centroid,
            radius: CENTROID_RADIUS,
            color: CENTROID_COLOR,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_truncate_circle_geometry() {
        let ball = DetectedBall {
            center: Point2::new(49.7, 50.2),
            radius: 19.9,
            centroid: Point2::new(50, 50),
        };
        let [circle, marker] = overlays_for(&ball);
        assert_eq!(
            circle,
            Overlay::Circle {
                center: Point2::new(49, 50),
                radius: 19,
                color: CIRCLE_COLOR,
                thickness: 2,
            }
        );
        assert_eq!(
            marker,
            Overlay::Marker {
                center: Point2::new(50, 50),
                radius: 5,
                color: CENTROID_COLOR,
            }
        );
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let ball = DetectedBall {
            center: Point2::new(10.0, 10.0),
            radius: 12.0,
            centroid: Point2::new(10, 10),
        };
        let mut sink: Vec<Overlay> = Vec::new();
        for o in &overlays_for(&ball) {
            sink.draw(o);
        }
        assert_eq!(sink.len(), 2);
        assert!(matches!(sink[0], Overlay::Circle { .. }));
    }
}
