// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Open polylines usable as guide curves

use super::{Curve, Line};
use crate::error::GeometryError;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Open polyline, parametrized by arc length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolylineData")]
pub struct Polyline {
    points: Vec<Point3<f64>>,
}

#[derive(Deserialize)]
struct PolylineData {
    points: Vec<Point3<f64>>,
}

impl TryFrom<PolylineData> for Polyline {
    type Error = GeometryError;

    fn try_from(data: PolylineData) -> Result<Self, Self::Error> {
        Self::new(data.points)
    }
}

impl Polyline {
    pub fn new(points: Vec<Point3<f64>>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints(points.len()));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.points.windows(2).map(|w| Line::new(w[0], w[1]))
    }
}

impl Curve for Polyline {
    fn start(&self) -> Point3<f64> {
        self.points[0]
    }

    fn end(&self) -> Point3<f64> {
        self.points[self.points.len() - 1]
    }

    fn point_at(&self, t: f64) -> Point3<f64> {
        let total = self.length();
        if total == 0.0 || t <= 0.0 {
            return self.start();
        }
        if t >= 1.0 {
            return self.end();
        }

        let mut remaining = t * total;
        for segment in self.segments() {
            let len = segment.length();
            if remaining <= len && len > 0.0 {
                return segment.point_at(remaining / len);
            }
            remaining -= len;
        }
        self.end()
    }

    fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn l_shape() -> Polyline {
        Polyline::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 4.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_polyline_length_and_ends() {
        let polyline = l_shape();
        assert_eq!(polyline.length(), 8.0);
        assert_eq!(polyline.start(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(polyline.end(), Point3::new(4.0, 4.0, 0.0));
    }

    #[test]
    fn test_polyline_point_at_arc_length() {
        let polyline = l_shape();
        assert_relative_eq!(polyline.point_at(0.25), Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(polyline.point_at(0.5), Point3::new(4.0, 0.0, 0.0));
        assert_relative_eq!(polyline.point_at(0.75), Point3::new(4.0, 2.0, 0.0));
    }

    #[test]
    fn test_deserialize_checks_point_count() {
        let json = serde_json::to_string(&l_shape()).unwrap();
        assert_eq!(serde_json::from_str::<Polyline>(&json).unwrap(), l_shape());

        assert!(serde_json::from_str::<Polyline>(r#"{"points":[]}"#).is_err());
        assert!(serde_json::from_str::<Polyline>(r#"{"points":[[1,2,3]]}"#).is_err());
    }

    #[test]
    fn test_polyline_needs_two_points() {
        assert_eq!(
            Polyline::new(vec![Point3::origin()]),
            Err(GeometryError::TooFewPoints(1))
        );
    }
}
