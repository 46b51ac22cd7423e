// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runway coordination primitives
//!
//! This module provides:
//! - **AdmissionState** - Shared runway state and the admission predicates
//! - **Runway** - Acquire/release arbitration with per-class wait conditions
//! - **WeatherOscillator** - Background weather gate with broadcast on improvement
//! - **StatusMonitor** - Periodic state reports and queue-drain shutdown signal

pub mod monitor;
pub mod runway;
pub mod state;
pub mod weather;

pub use monitor::{MonitorVerdict, StatusMonitor, StatusReport};
pub use runway::Runway;
pub use state::{AdmissionSnapshot, AdmissionState, WakeTarget};
pub use weather::{RandomWeather, ScriptedWeather, WeatherOscillator, WeatherSource};
