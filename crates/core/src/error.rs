// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for configuration and simulation

use std::path::PathBuf;
use thiserror::Error;

/// Errors loading or validating a simulation config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors that stop a simulation from running
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to launch {agent}: {source}")]
    Spawn {
        agent: String,
        #[source]
        source: std::io::Error,
    },
}
