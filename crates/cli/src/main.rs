// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! runway - runway admission simulator CLI

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, run};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "runway",
    version,
    about = "Runway admission simulator - helicopters, airplanes, emergencies and weather"
)]
struct Cli {
    /// Simulation config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the fleet and run until it lands or the queues drain
    Run(run::RunArgs),
    /// Print the effective configuration as TOML
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    match cli.command {
        Commands::Run(args) => run::handle(args, cli.config.as_deref()).await,
        Commands::Config(args) => config::handle(args, cli.config.as_deref()),
    }
}

/// Log to stderr so stdout carries only the reports
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
