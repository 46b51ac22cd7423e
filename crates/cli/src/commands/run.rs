// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `runway run` - Launch the fleet and report until it stops

use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use runway_core::{Simulation, SimulationConfig};
use std::path::Path;
use tokio::sync::mpsc;

#[derive(Args)]
pub struct RunArgs {
    /// Number of helicopters to launch
    #[arg(long)]
    pub helicopters: Option<u32>,

    /// Number of airplanes to launch
    #[arg(long)]
    pub airplanes: Option<u32>,

    /// How long each aircraft holds the runway (e.g. "2s", "150ms")
    #[arg(long)]
    pub occupy: Option<humantime::Duration>,

    /// Pause between launches
    #[arg(long)]
    pub stagger: Option<humantime::Duration>,

    /// Pause between status reports
    #[arg(long)]
    pub monitor_interval: Option<humantime::Duration>,

    /// Seed for reproducible weather
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl RunArgs {
    /// Apply command-line overrides on top of the loaded config
    fn apply(&self, config: &mut SimulationConfig) {
        if let Some(count) = self.helicopters {
            config.helicopters.count = count;
        }
        if let Some(count) = self.airplanes {
            config.airplanes.count = count;
        }
        if let Some(occupy) = self.occupy {
            config.occupy = occupy.into();
        }
        if let Some(stagger) = self.stagger {
            config.launch_stagger = stagger.into();
        }
        if let Some(interval) = self.monitor_interval {
            config.monitor.interval = interval.into();
        }
        if self.seed.is_some() {
            config.weather.seed = self.seed;
        }
    }
}

pub async fn handle(args: RunArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    args.apply(&mut config);
    tracing::debug!(?config, "effective config");

    let simulation = Simulation::new(config)?;
    let shutdown = simulation.shutdown_token();
    let format = args.format;

    let (reports_tx, mut reports) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(report) = reports.recv().await {
            output::print(&report, format);
        }
    });

    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nInterrupted, stopping simulation...");
            shutdown.cancel();
        }
    });

    let report = simulation.run(reports_tx).await;
    interrupt.abort();
    printer.await?;

    let report = report?;
    output::print(&report, format);
    Ok(())
}
