// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use geo::{Area, Coord, LineString, Polygon};
use nalgebra::Point3;

/// Default absolute tolerance used when matching segment endpoints
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Check if two floats are approximately equal
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Check if two points coincide, component by component, within `epsilon`
pub fn points_coincide(a: &Point3<f64>, b: &Point3<f64>, epsilon: f64) -> bool {
    approx_eq(a.x, b.x, epsilon) && approx_eq(a.y, b.y, epsilon) && approx_eq(a.z, b.z, epsilon)
}

/// Linear interpolation between two points
pub fn lerp_point(a: &Point3<f64>, b: &Point3<f64>, t: f64) -> Point3<f64> {
    a + (b - a) * t
}

/// Project points onto the XY plane as a `geo` line string
pub fn xy_ring(points: &[Point3<f64>]) -> LineString<f64> {
    points.iter().map(|p| Coord { x: p.x, y: p.y }).collect()
}

/// Signed area of a closed ring projected on the XY plane.
///
/// Positive for counter-clockwise rings. Closure is implicit: the last
/// point connects back to the first. Repeated consecutive points add a
/// zero cross product and do not change the result.
pub fn signed_area_xy(points: &[Point3<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    Polygon::new(xy_ring(points), vec![]).signed_area()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0001, 0.001));
        assert!(!approx_eq(1.0, 1.1, 0.001));
    }

    #[test]
    fn test_points_coincide() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-12, 2.0, 3.0 - 1e-12);
        assert!(points_coincide(&a, &b, DEFAULT_TOLERANCE));
        assert!(!points_coincide(&a, &Point3::new(1.0, 2.1, 3.0), DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_lerp_point() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(10.0, 20.0, 0.0);
        assert_eq!(lerp_point(&a, &b, 0.5), Point3::new(5.0, 10.0, 0.0));
        assert_eq!(lerp_point(&a, &b, 0.0), a);
        assert_eq!(lerp_point(&a, &b, 1.0), b);
    }

    #[test]
    fn test_signed_area_orientation() {
        let ccw = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        assert_eq!(signed_area_xy(&ccw), 1.0);

        let mut cw = ccw;
        cw.reverse();
        assert_eq!(signed_area_xy(&cw), -1.0);
    }

    #[test]
    fn test_signed_area_repeated_vertex() {
        let ring = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        assert_eq!(signed_area_xy(&ring), 1.0);
        assert_eq!(signed_area_xy(&ring[..2]), 0.0);
    }

    #[test]
    fn test_signed_area_ignores_z() {
        let ring = [
            Point3::new(0.0, 0.0, 3.5),
            Point3::new(4.0, 0.0, 3.5),
            Point3::new(4.0, 2.0, 7.0),
            Point3::new(0.0, 2.0, 0.0),
        ];
        assert_eq!(signed_area_xy(&ring), 8.0);
        assert_eq!(xy_ring(&ring).0.len(), 4);
    }
}
