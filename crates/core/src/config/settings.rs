// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation settings
//!
//! Loaded from TOML. Every field is optional; the defaults reproduce the
//! classic scenario of eight helicopters followed by eight airplanes.

use crate::agent::EmergencyPattern;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// One class of aircraft to launch
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Number of agents to launch
    pub count: u32,
    /// Which launch positions request in emergency mode
    pub emergency: EmergencyPattern,
}

impl FleetConfig {
    pub fn new(count: u32, emergency: EmergencyPattern) -> Self {
        Self { count, emergency }
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self::new(0, EmergencyPattern::Never)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Shortest pause between weather draws
    #[serde(with = "humantime_serde")]
    pub min_interval: Duration,
    /// Longest pause between weather draws
    #[serde(with = "humantime_serde")]
    pub max_interval: Duration,
    /// Weather before the first draw
    pub initially_good: bool,
    /// Seed for reproducible weather; random when absent
    pub seed: Option<u64>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_secs(3),
            max_interval: Duration::from_secs(7),
            initially_good: true,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Pause between status checks
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
        }
    }
}

/// Complete simulation configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// How long each agent holds the runway
    #[serde(with = "humantime_serde")]
    pub occupy: Duration,
    /// Pause between consecutive launches
    #[serde(with = "humantime_serde")]
    pub launch_stagger: Duration,
    pub helicopters: FleetConfig,
    pub airplanes: FleetConfig,
    pub weather: WeatherConfig,
    pub monitor: MonitorConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            occupy: Duration::from_secs(2),
            launch_stagger: Duration::from_millis(100),
            helicopters: FleetConfig::new(8, EmergencyPattern::OddPositions),
            airplanes: FleetConfig::new(8, EmergencyPattern::EvenPositions),
            weather: WeatherConfig::default(),
            monitor: MonitorConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.min_interval > self.weather.max_interval {
            return Err(ConfigError::Invalid(format!(
                "weather.min_interval ({}) exceeds weather.max_interval ({})",
                humantime::format_duration(self.weather.min_interval),
                humantime::format_duration(self.weather.max_interval),
            )));
        }
        if self.monitor.interval.is_zero() {
            return Err(ConfigError::Invalid(
                "monitor.interval must be greater than zero".to_string(),
            ));
        }
        if self.helicopters.count.checked_add(self.airplanes.count).is_none() {
            return Err(ConfigError::Invalid("fleet size overflows".to_string()));
        }
        Ok(())
    }

    /// Total number of agents to launch
    pub fn fleet_size(&self) -> u32 {
        self.helicopters.count.saturating_add(self.airplanes.count)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
