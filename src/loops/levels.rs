// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-level outline reconstruction

use super::LoopAssembler;
use crate::error::GeometryError;
use crate::geometry::{Line, Point, Polygon};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Building level a segment belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub elevation: f64,
    pub height: f64,
}

impl Level {
    pub fn new(name: impl Into<String>, elevation: f64) -> Self {
        Self::with_height(name, elevation, 1.0)
    }

    pub fn with_height(name: impl Into<String>, elevation: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            elevation,
            height,
        }
    }
}

/// A segment tagged with its level and category (e.g. "facade", "terrace")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub level: Level,
    pub category: String,
    pub line: Line,
}

impl LineRecord {
    pub fn new(level: Level, category: impl Into<String>, line: Line) -> Self {
        Self {
            level,
            category: category.into(),
            line,
        }
    }

    pub fn is_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

/// Outline of one level: the largest loop and the holes inside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelOutline {
    pub level: Level,
    pub perimeter: Polygon,
    pub voids: Vec<Polygon>,
    pub discarded: usize,
    pub open_chains: usize,
}

impl LevelOutline {
    /// Perimeter area minus void areas
    pub fn net_area(&self) -> f64 {
        self.perimeter.area() - self.voids.iter().map(Polygon::area).sum::<f64>()
    }

    /// Module points sampled every `module_length` along each perimeter edge
    pub fn module_points(&self, module_length: f64) -> Result<Vec<Vec<Point>>, GeometryError> {
        self.perimeter
            .edges()
            .iter()
            .map(|edge| edge.points_at_distance(module_length))
            .collect()
    }
}

/// Segments of `category`, grouped by level name.
///
/// Levels are ordered by elevation; equal elevations keep the order in
/// which the levels first appear. A level takes the elevation of its first
/// record.
pub fn group_by_level(records: &[LineRecord], category: &str) -> Vec<(Level, Vec<Line>)> {
    let mut groups: Vec<(Level, Vec<Line>)> = Vec::new();

    for record in records.iter().filter(|r| r.is_category(category)) {
        match groups.iter_mut().find(|(level, _)| level.name == record.level.name) {
            Some((_, lines)) => lines.push(record.line),
            None => groups.push((record.level.clone(), vec![record.line])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| a.elevation.total_cmp(&b.elevation));
    groups
}

impl LoopAssembler {
    /// One outline per level for the segments of `category`.
    ///
    /// Levels are assembled independently and in parallel; a level whose
    /// segments close no loop is skipped.
    pub fn level_outlines(&self, records: &[LineRecord], category: &str) -> Vec<LevelOutline> {
        group_by_level(records, category)
            .into_par_iter()
            .filter_map(|(level, lines)| {
                let assembly = self.assemble_with_report(lines);
                let mut polygons = assembly.polygons.into_iter();
                let Some(perimeter) = polygons.next() else {
                    tracing::warn!(level = %level.name, "No closed loop found for level");
                    return None;
                };
                Some(LevelOutline {
                    level,
                    perimeter,
                    voids: polygons.collect(),
                    discarded: assembly.discarded,
                    open_chains: assembly.open_chains,
                })
            })
            .collect()
    }
}
