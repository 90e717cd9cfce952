// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closed loop reconstruction from unordered segments

use crate::geometry::{Line, Polygon};
use crate::utils::math::{points_coincide, signed_area_xy, DEFAULT_TOLERANCE};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Result of one assembly run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    /// Counter-clockwise loops, largest area first
    pub polygons: Vec<Polygon>,
    /// Chains dropped because their area was zero
    pub discarded: usize,
    /// Chains that stopped before returning to their first point
    pub open_chains: usize,
}

impl Assembly {
    /// Largest loop, by convention the outer perimeter
    pub fn perimeter(&self) -> Option<&Polygon> {
        self.polygons.first()
    }

    /// Every loop after the perimeter
    pub fn voids(&self) -> &[Polygon] {
        self.polygons.get(1..).unwrap_or(&[])
    }
}

/// Chains segments end to end into closed polygons.
///
/// Endpoints match when every coordinate differs by at most `tolerance`.
/// When several unused segments touch the current chain end, the first one
/// in input order wins; branching inputs therefore produce one arbitrary
/// but reproducible decomposition rather than every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoopAssembler {
    tolerance: f64,
}

impl Default for LoopAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopAssembler {
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Closed loops, largest first
    pub fn assemble<I>(&self, segments: I) -> Vec<Polygon>
    where
        I: IntoIterator<Item = Line>,
    {
        self.assemble_with_report(segments).polygons
    }

    /// Closed loops plus counts of what was dropped along the way
    pub fn assemble_with_report<I>(&self, segments: I) -> Assembly
    where
        I: IntoIterator<Item = Line>,
    {
        let segments: Vec<Line> = segments.into_iter().collect();
        let mut used = vec![false; segments.len()];
        let mut remaining = segments.len();
        let mut assembly = Assembly::default();

        while let Some(seed) = used.iter().position(|u| !u) {
            used[seed] = true;
            remaining -= 1;

            let first = segments[seed].start;
            let mut chain = vec![first];
            let mut current_end = segments[seed].end;

            while remaining > 0 {
                let Some((index, segment)) = self.next_segment(&segments, &used, &current_end) else {
                    break;
                };
                used[index] = true;
                remaining -= 1;
                chain.push(segment.start);
                current_end = segment.end;
            }

            if !points_coincide(&current_end, &first, self.tolerance) {
                assembly.open_chains += 1;
                tracing::warn!(
                    points = chain.len(),
                    "Segment chain does not close, keeping it as a candidate loop"
                );
            }

            match self.close_loop(chain) {
                Some(polygon) => {
                    tracing::debug!(
                        vertices = polygon.vertex_count(),
                        area = polygon.area(),
                        "Closed loop"
                    );
                    assembly.polygons.push(polygon);
                }
                None => assembly.discarded += 1,
            }
        }

        // stable: equal areas keep discovery order
        assembly
            .polygons
            .sort_by(|a, b| b.area().total_cmp(&a.area()));
        assembly
    }

    /// First unused segment touching `end`, oriented to continue the chain
    fn next_segment(
        &self,
        segments: &[Line],
        used: &[bool],
        end: &Point3<f64>,
    ) -> Option<(usize, Line)> {
        segments
            .iter()
            .enumerate()
            .filter(|(i, _)| !used[*i])
            .find_map(|(i, segment)| {
                if points_coincide(&segment.start, end, self.tolerance) {
                    Some((i, *segment))
                } else if points_coincide(&segment.end, end, self.tolerance) {
                    Some((i, segment.reversed()))
                } else {
                    None
                }
            })
    }

    /// Normalize winding to counter-clockwise, or drop a zero-area chain
    fn close_loop(&self, mut chain: Vec<Point3<f64>>) -> Option<Polygon> {
        let area = signed_area_xy(&chain);
        if area.abs() <= self.tolerance * self.tolerance {
            tracing::debug!(points = chain.len(), "Discarding degenerate loop");
            return None;
        }
        if area < 0.0 {
            chain.reverse();
        }
        Some(Polygon::from_checked(chain))
    }
}
