// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Line record file importer

use crate::loops::LineRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a line record file
pub fn import_line_file(path: impl AsRef<Path>) -> Result<Vec<LineRecord>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read line file: {}", path.display()))?;

    let records = super::parse_line_records(&source)
        .with_context(|| format!("Failed to parse line file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), records = records.len(), "Imported line records");
    Ok(records)
}
