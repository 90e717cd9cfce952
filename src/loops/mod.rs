// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Loops module - rebuild outlines from unordered line segments

mod assembler;
mod levels;

pub use assembler::{Assembly, LoopAssembler};
pub use levels::{group_by_level, Level, LevelOutline, LineRecord};
