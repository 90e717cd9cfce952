// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Grid axis: `U` runs along the guide curves, `V` across them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    U,
    V,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::U => write!(f, "u"),
            Axis::V => write!(f, "v"),
        }
    }
}

/// Grid configuration errors, raised at construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("{curve} guide curve has zero length")]
    ZeroLengthCurve { curve: &'static str },

    #[error("division count along {axis} must be at least 1, got {count}")]
    InvalidCount { axis: Axis, count: usize },

    #[error("spacing along {axis} must be a positive finite distance, got {spacing}")]
    InvalidSpacing { axis: Axis, spacing: f64 },

    #[error("{count} divisions along {axis} exceed the limit of {max}", max = crate::grid::MAX_DIVISIONS)]
    TooManyDivisions { axis: Axis, count: usize },

    #[error("explicit distances along {axis} must not be empty")]
    EmptyDistances { axis: Axis },

    #[error("explicit distance #{index} along {axis} must be positive and finite, got {value}")]
    InvalidDistance { axis: Axis, index: usize, value: f64 },

    #[error("footprint must be a quadrilateral, got {0} vertices")]
    NotQuadrilateral(usize),
}

/// Polygon and curve construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("polygon is degenerate (signed area {0})")]
    DegeneratePolygon(f64),

    #[error("sampling distance must be positive, got {0}")]
    InvalidDistance(f64),

    #[error("polyline needs at least 2 points, got {0}")]
    TooFewPoints(usize),
}

/// Line record parsing errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: expected 9 comma-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: field `{field}` is not a number: {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: level name is empty")]
    EmptyLevelName { line: usize },
}
