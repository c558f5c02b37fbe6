//! Angle → linear-gradient endpoint projection.
//!
//! The angle is rotated by −90° so that 0° runs top to bottom, then projected
//! onto the unit box in percentage coordinates. Start and end are always
//! antipodal around (50%, 50%).

use crate::model::Color;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// `<linearGradient>` endpoints in percent of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientVector {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Compute the gradient vector for `angle` degrees. Any finite angle is accepted.
pub fn gradient_vector(angle: f64) -> GradientVector {
    let radians = (angle - 90.0) * (PI / 180.0);
    let (sin, cos) = radians.sin_cos();
    GradientVector {
        x1: 50.0 + cos * 50.0,
        y1: 50.0 + sin * 50.0,
        x2: 50.0 - cos * 50.0,
        y2: 50.0 - sin * 50.0,
    }
}

/// Parameters driving the background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientParams {
    pub start: Color,
    pub end: Color,
    /// Degrees.
    pub angle: f64,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            start: Color::WHITE,
            end: Color::BLACK,
            angle: 180.0,
        }
    }
}

impl GradientParams {
    pub fn vector(&self) -> GradientVector {
        gradient_vector(self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_degrees_runs_top_to_bottom() {
        let v = gradient_vector(0.0);
        assert!(approx(v.x1, 50.0) && approx(v.y1, 0.0), "{v:?}");
        assert!(approx(v.x2, 50.0) && approx(v.y2, 100.0), "{v:?}");
    }

    #[test]
    fn ninety_degrees_is_horizontal() {
        let v = gradient_vector(90.0);
        assert_eq!(v, GradientVector { x1: 100.0, y1: 50.0, x2: 0.0, y2: 50.0 });
    }

    #[test]
    fn endpoints_are_antipodal() {
        for angle in 0..360 {
            let v = gradient_vector(f64::from(angle));
            assert!(approx(v.x1 + v.x2, 100.0), "x at {angle}°: {v:?}");
            assert!(approx(v.y1 + v.y2, 100.0), "y at {angle}°: {v:?}");
            for c in [v.x1, v.y1, v.x2, v.y2] {
                assert!((-1e-9..=100.0 + 1e-9).contains(&c), "{c} out of box at {angle}°");
            }
        }
    }

    #[test]
    fn out_of_range_angles_wrap() {
        let a = gradient_vector(45.0);
        let b = gradient_vector(45.0 + 720.0);
        let c = gradient_vector(45.0 - 360.0);
        for other in [b, c] {
            assert!(approx(a.x1, other.x1) && approx(a.y1, other.y1));
            assert!(approx(a.x2, other.x2) && approx(a.y2, other.y2));
        }
    }

    #[test]
    fn same_angle_same_vector() {
        assert_eq!(gradient_vector(137.0), gradient_vector(137.0));
    }
}
