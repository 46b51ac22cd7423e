// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! runway-core: priority admission control for a shared runway
//!
//! This crate provides:
//! - The runway arbiter: helicopters and airplanes, each in normal or
//!   emergency mode, contending for one runway behind a weather gate
//! - Weather oscillator and status monitor background loops
//! - Observable runway events for instrumentation
//! - TOML-backed simulation config and a driver that runs a whole fleet

pub mod agent;
pub mod config;
pub mod coordination;
pub mod error;
pub mod event;
pub mod id;
pub mod simulation;

// Re-exports
pub use agent::{Agent, AgentId, AgentKind, AgentMode, EmergencyPattern};
pub use config::{FleetConfig, MonitorConfig, SimulationConfig, WeatherConfig};
pub use coordination::{
    AdmissionSnapshot, MonitorVerdict, RandomWeather, Runway, ScriptedWeather, StatusMonitor,
    StatusReport, WakeTarget, WeatherOscillator, WeatherSource,
};
pub use error::{ConfigError, SimulationError};
pub use event::{NoopObserver, RecordingObserver, RunwayEvent, RunwayObserver};
pub use id::{AgentIdGen, SequentialAgentIds};
pub use simulation::{Simulation, SimulationReport, StopReason};
