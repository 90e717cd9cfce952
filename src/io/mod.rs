// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - line record parsing, importing, and JSON export

mod exporter;
mod importer;
mod parser;

pub use exporter::export_json;
pub use importer::import_line_file;
pub use parser::{parse_line_record, parse_line_records};
