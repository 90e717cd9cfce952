// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Line record parser
//!
//! One record per line, nine comma-separated fields:
//! `levelName, levelElevation, lineType, startX, startY, startZ, endX, endY, endZ`.
//! Blank lines and lines starting with `#` are ignored.

use crate::error::ParseError;
use crate::geometry::Line;
use crate::loops::{Level, LineRecord};
use nalgebra::Point3;

const FIELD_COUNT: usize = 9;

const COORDINATE_FIELDS: [&str; 6] = ["startX", "startY", "startZ", "endX", "endY", "endZ"];

/// Parse a whole document of line records
pub fn parse_line_records(source: &str) -> Result<Vec<LineRecord>, ParseError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| parse_line_record(line, index + 1))
        .collect()
}

/// Parse a single record; `line_no` is only used in error messages
pub fn parse_line_record(line: &str, line_no: usize) -> Result<LineRecord, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(ParseError::EmptyLevelName { line: line_no });
    }
    let elevation = parse_number(fields[1], "levelElevation", line_no)?;
    let category = fields[2];

    let mut coords = [0.0; 6];
    for (slot, (value, field)) in coords
        .iter_mut()
        .zip(fields[3..].iter().zip(COORDINATE_FIELDS))
    {
        *slot = parse_number(value, field, line_no)?;
    }

    let start = Point3::new(coords[0], coords[1], coords[2]);
    let end = Point3::new(coords[3], coords[4], coords[5]);
    Ok(LineRecord::new(
        Level::new(name, elevation),
        category,
        Line::new(start, end),
    ))
}

fn parse_number(value: &str, field: &'static str, line_no: usize) -> Result<f64, ParseError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            line: line_no,
            field,
            value: value.to_string(),
        })
}
