// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Straight segments and the curve abstraction used by grids

use crate::error::GeometryError;
use crate::utils::math::{lerp_point, points_coincide};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A parametric curve over `t ∈ [0, 1]`
///
/// Grids only need these four operations from their guide curves.
pub trait Curve {
    fn start(&self) -> Point3<f64>;
    fn end(&self) -> Point3<f64>;
    /// Point at normalized parameter `t`
    fn point_at(&self, t: f64) -> Point3<f64>;
    fn length(&self) -> f64;
}

/// Straight line segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl Line {
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Build a line in the XY plane
    pub fn from_xy(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point3::new(x0, y0, 0.0), Point3::new(x1, y1, 0.0))
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Unit direction, or zero for a degenerate line
    pub fn direction(&self) -> Vector3<f64> {
        let v = self.end - self.start;
        let len = v.norm();
        if len > 0.0 {
            v / len
        } else {
            Vector3::zeros()
        }
    }

    pub fn point_at(&self, t: f64) -> Point3<f64> {
        lerp_point(&self.start, &self.end, t)
    }

    pub fn midpoint(&self) -> Point3<f64> {
        self.point_at(0.5)
    }

    /// Same line with start and end swapped
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// True when both endpoints coincide within `tolerance`
    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        points_coincide(&self.start, &self.end, tolerance)
    }

    /// Sample points every `distance` along the line.
    ///
    /// Returns `floor(length / distance) + 1` points. The last one is always
    /// the end point, so the final interval absorbs any remainder.
    pub fn points_at_distance(&self, distance: f64) -> Result<Vec<Point3<f64>>, GeometryError> {
        if !(distance.is_finite() && distance > 0.0) {
            return Err(GeometryError::InvalidDistance(distance));
        }

        let length = self.length();
        if length == 0.0 {
            return Ok(vec![self.start]);
        }

        let steps = (length / distance).floor() as usize;
        let mut points: Vec<Point3<f64>> = (0..=steps)
            .map(|i| self.point_at(i as f64 * distance / length))
            .collect();
        if let Some(last) = points.last_mut() {
            *last = self.end;
        }
        Ok(points)
    }
}

impl Curve for Line {
    fn start(&self) -> Point3<f64> {
        self.start
    }

    fn end(&self) -> Point3<f64> {
        self.end
    }

    fn point_at(&self, t: f64) -> Point3<f64> {
        Line::point_at(self, t)
    }

    fn length(&self) -> f64 {
        Line::length(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_line_basics() {
        let line = Line::from_xy(0.0, 0.0, 3.0, 4.0);
        assert_eq!(line.length(), 5.0);
        assert_relative_eq!(line.direction(), Vector3::new(0.6, 0.8, 0.0));
        assert_eq!(line.midpoint(), Point3::new(1.5, 2.0, 0.0));
        assert_eq!(line.reversed().start, line.end);
    }

    #[test]
    fn test_degenerate_line() {
        let line = Line::from_xy(1.0, 1.0, 1.0, 1.0);
        assert!(line.is_degenerate(1e-9));
        assert_eq!(line.direction(), Vector3::zeros());
    }

    #[test]
    fn test_points_at_distance_exact_multiple() {
        let line = Line::from_xy(0.0, 0.0, 9.0, 0.0);
        let points = line.points_at_distance(3.0).unwrap();
        assert_eq!(points.len(), 4);
        for (point, expected) in points.iter().zip([0.0, 3.0, 6.0, 9.0]) {
            assert_relative_eq!(point.x, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_points_at_distance_remainder_goes_to_last_module() {
        let line = Line::from_xy(0.0, 0.0, 10.0, 0.0);
        let points = line.points_at_distance(3.0).unwrap();
        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[2].x, 6.0);
        assert_eq!(points[3], line.end);
    }

    #[test]
    fn test_points_at_distance_rejects_non_positive() {
        let line = Line::from_xy(0.0, 0.0, 10.0, 0.0);
        assert_eq!(
            line.points_at_distance(0.0),
            Err(GeometryError::InvalidDistance(0.0))
        );
        assert!(line.points_at_distance(-1.0).is_err());
    }
}
