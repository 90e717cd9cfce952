// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Layout configuration

use crate::grid::GridConfig;
use crate::loops::LoopAssembler;
use crate::utils::math::DEFAULT_TOLERANCE;
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up by [`Config::load`]
pub const CONFIG_FILE: &str = "footprint.toml";

/// Layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint matching tolerance for loop assembly
    pub tolerance: f64,
    /// Line category to assemble into outlines
    pub category: String,
    /// Spacing of facade modules along outline edges
    pub module_length: f64,
    /// Division schemes for footprint grids
    pub grid: GridConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            category: "facade".to_string(),
            module_length: 1.35,
            grid: GridConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        if let Ok(tolerance) = std::env::var("FOOTPRINT_TOLERANCE") {
            config.tolerance = tolerance
                .parse()
                .with_context(|| format!("Invalid FOOTPRINT_TOLERANCE: {}", tolerance))?;
        }

        if let Ok(category) = std::env::var("FOOTPRINT_CATEGORY") {
            config.category = category;
        }

        if let Ok(module_length) = std::env::var("FOOTPRINT_MODULE_LENGTH") {
            config.module_length = module_length
                .parse()
                .with_context(|| format!("Invalid FOOTPRINT_MODULE_LENGTH: {}", module_length))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.tolerance.is_finite() && self.tolerance >= 0.0,
            "tolerance must be a finite non-negative number, got {}",
            self.tolerance
        );
        ensure!(
            self.module_length.is_finite() && self.module_length > 0.0,
            "module_length must be positive, got {}",
            self.module_length
        );
        Ok(())
    }

    pub fn assembler(&self) -> LoopAssembler {
        LoopAssembler::with_tolerance(self.tolerance)
    }
}
