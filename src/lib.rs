// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Footprint
//!
//! Planar geometry core for building layout: subdivides a footprint into a
//! grid of cells between two guide curves, and rebuilds closed outlines
//! (perimeter and voids) from unordered line segments.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod io;
pub mod loops;
pub mod utils;

pub use config::Config;
pub use error::{Axis, GeometryError, GridError, ParseError};
pub use geometry::{BoundingBox, Curve, Line, Point, Polygon, Polyline};
pub use grid::{Cell, DivisionScheme, ExteriorEdge, Grid, GridConfig, Side};
pub use io::{export_json, import_line_file, parse_line_records};
pub use loops::{Assembly, Level, LevelOutline, LineRecord, LoopAssembler};

use anyhow::Result;

/// Rebuild one outline per level from a line record file
pub fn outlines_from_file(path: &str, config: &Config) -> Result<Vec<LevelOutline>> {
    let records = import_line_file(path)?;
    Ok(config.assembler().level_outlines(&records, &config.category))
}

/// Subdivide a level outline's perimeter, which must be a quadrilateral
pub fn grid_for_outline(outline: &LevelOutline, config: &Config) -> Result<Grid> {
    Ok(Grid::from_quadrilateral(&outline.perimeter, &config.grid)?)
}
