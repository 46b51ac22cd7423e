// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `runway config` - Show the effective configuration

use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct ConfigArgs {}

pub fn handle(_args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
