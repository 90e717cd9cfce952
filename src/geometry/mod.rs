// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - points, lines, curves and polygons

mod bbox;
mod line;
mod polygon;
mod polyline;

pub use bbox::BoundingBox;
pub use line::{Curve, Line};
pub use polygon::Polygon;
pub use polyline::Polyline;

/// 3D point used throughout the crate
pub type Point = nalgebra::Point3<f64>;
