// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Division schemes and normalized parameter sequences

use crate::error::{Axis, GridError};
use serde::{Deserialize, Serialize};

/// Upper bound on the interval count of one axis
pub const MAX_DIVISIONS: usize = 1_000_000;

/// How an axis of the grid is subdivided
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DivisionScheme {
    /// Split into `n` equal intervals
    Count(usize),
    /// Split every `spacing` units; the interval count is rounded up
    Spacing(f64),
    /// Absolute interval lengths, in order
    Distances(Vec<f64>),
}

impl Default for DivisionScheme {
    fn default() -> Self {
        Self::Count(1)
    }
}

impl DivisionScheme {
    /// Normalized parameters for an axis of the given length.
    ///
    /// The result is strictly increasing, starts at 0 and ends at 1.
    pub fn parameters(&self, axis: Axis, length: f64) -> Result<Vec<f64>, GridError> {
        match self {
            Self::Count(count) => {
                if *count == 0 {
                    return Err(GridError::InvalidCount { axis, count: 0 });
                }
                checked_equal_divisions(axis, *count)
            }
            Self::Spacing(spacing) => {
                if !(spacing.is_finite() && *spacing > 0.0) {
                    return Err(GridError::InvalidSpacing {
                        axis,
                        spacing: *spacing,
                    });
                }
                checked_equal_divisions(axis, count_for_spacing(length, *spacing))
            }
            Self::Distances(distances) => {
                if distances.is_empty() {
                    return Err(GridError::EmptyDistances { axis });
                }
                if let Some((index, value)) = distances
                    .iter()
                    .enumerate()
                    .find(|(_, d)| !(d.is_finite() && **d > 0.0))
                {
                    return Err(GridError::InvalidDistance {
                        axis,
                        index,
                        value: *value,
                    });
                }
                Ok(divisions_from_distances(distances, length))
            }
        }
    }
}

fn checked_equal_divisions(axis: Axis, count: usize) -> Result<Vec<f64>, GridError> {
    if count > MAX_DIVISIONS {
        return Err(GridError::TooManyDivisions { axis, count });
    }
    Ok(equal_divisions(count))
}

/// `n + 1` evenly spaced parameters over `[0, 1]`
pub fn equal_divisions(n: usize) -> Vec<f64> {
    let step = 1.0 / n as f64;
    let mut result: Vec<f64> = (0..n).map(|i| step * i as f64).collect();
    result.push(1.0);
    result
}

/// Interval count needed to cover `length` with steps of at most `spacing`.
///
/// Saturates at `usize::MAX` for vanishingly small spacings.
pub fn count_for_spacing(length: f64, spacing: f64) -> usize {
    ((length / spacing).ceil() as usize).max(1)
}

/// Cumulative normalized parameters for explicit interval lengths.
///
/// Accumulation stops at the first distance that reaches or passes the end
/// of the axis; a terminal 1.0 is appended when the distances fall short.
/// A distance too small to move the running parameter is skipped.
pub fn divisions_from_distances(distances: &[f64], length: f64) -> Vec<f64> {
    let mut result = Vec::with_capacity(distances.len() + 2);
    result.push(0.0);

    let mut cumulated = 0.0;
    for distance in distances {
        cumulated += distance;
        let t = cumulated / length;
        if t >= 1.0 {
            result.push(1.0);
            break;
        }
        if result.last().map_or(true, |&previous| t > previous) {
            result.push(t);
        }
    }

    if result.last() != Some(&1.0) {
        result.push(1.0);
    }
    result
}
