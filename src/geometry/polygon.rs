// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closed planar polygons

use super::{BoundingBox, Line};
use crate::error::GeometryError;
use crate::utils::math::signed_area_xy;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Closed polygon; the last vertex implicitly connects back to the first.
///
/// Always has at least 3 vertices and a non-zero signed area on the XY
/// plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonData")]
pub struct Polygon {
    vertices: Vec<Point3<f64>>,
}

#[derive(Deserialize)]
struct PolygonData {
    vertices: Vec<Point3<f64>>,
}

impl TryFrom<PolygonData> for Polygon {
    type Error = GeometryError;

    fn try_from(data: PolygonData) -> Result<Self, Self::Error> {
        Self::new(data.vertices)
    }
}

impl Polygon {
    pub fn new(vertices: Vec<Point3<f64>>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        let area = signed_area_xy(&vertices);
        if area == 0.0 {
            return Err(GeometryError::DegeneratePolygon(area));
        }
        Ok(Self { vertices })
    }

    /// Axis-aligned rectangle with its lower-left corner at `(x, y)`, wound
    /// counter-clockwise
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        Self::new(vec![
            Point3::new(x, y, 0.0),
            Point3::new(x + width, y, 0.0),
            Point3::new(x + width, y + height, 0.0),
            Point3::new(x, y + height, 0.0),
        ])
    }

    /// Wrap vertices that the caller has already checked
    pub(crate) fn from_checked(vertices: Vec<Point3<f64>>) -> Self {
        debug_assert!(vertices.len() >= 3);
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn into_vertices(self) -> Vec<Point3<f64>> {
        self.vertices
    }

    /// Shoelace area on the XY plane, positive when counter-clockwise
    pub fn signed_area(&self) -> f64 {
        signed_area_xy(&self.vertices)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    pub fn to_counter_clockwise(&self) -> Self {
        if self.is_counter_clockwise() {
            self.clone()
        } else {
            self.reversed()
        }
    }

    /// Edges in vertex order, closing edge included
    pub fn edges(&self) -> Vec<Line> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Line::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().iter().map(Line::length).sum()
    }

    /// Average of the vertices
    pub fn centroid(&self) -> Point3<f64> {
        let sum = self
            .vertices
            .iter()
            .fold(nalgebra::Vector3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / self.vertices.len() as f64)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }
}
