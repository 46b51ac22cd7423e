// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod config;
pub mod run;

use anyhow::{Context, Result};
use runway_core::SimulationConfig;
use std::path::Path;

/// Load the config file if given, otherwise the built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<SimulationConfig> {
    match path {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(SimulationConfig::default()),
    }
}
