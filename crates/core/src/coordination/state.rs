// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admission state and the pure rules evaluated over it
//!
//! Everything here is plain data. The [`Runway`](super::Runway) owns the only
//! instance behind its mutex; these functions are what it evaluates while
//! holding that lock.

use crate::agent::{Agent, AgentId, AgentKind, AgentMode};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Which wait condition a release (or weather change) signals
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WakeTarget {
    Emergency,
    Helicopter,
    Airplane,
}

impl WakeTarget {
    /// Condition an agent parks on while waiting for admission
    pub fn for_agent(agent: &Agent) -> Self {
        match (agent.mode, agent.kind) {
            (AgentMode::Emergency, _) => WakeTarget::Emergency,
            (AgentMode::Normal, AgentKind::Helicopter) => WakeTarget::Helicopter,
            (AgentMode::Normal, AgentKind::Airplane) => WakeTarget::Airplane,
        }
    }
}

/// Shared runway state
#[derive(Clone, Debug)]
pub struct AdmissionState {
    pub(crate) runway_free: bool,
    pub(crate) helicopters_waiting: u32,
    pub(crate) airplanes_waiting: u32,
    pub(crate) emergency_active: bool,
    pub(crate) weather_good: bool,
    /// Agent holding the runway, for contract checks
    pub(crate) holder: Option<AgentId>,
    /// Agents between entering `acquire` and calling `release`
    pub(crate) in_flight: HashSet<AgentId>,
}

impl Default for AdmissionState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AdmissionState {
    /// Free runway, nobody waiting, no emergency
    pub fn new(weather_good: bool) -> Self {
        Self {
            runway_free: true,
            helicopters_waiting: 0,
            airplanes_waiting: 0,
            emergency_active: false,
            weather_good,
            holder: None,
            in_flight: HashSet::new(),
        }
    }

    /// Admission predicate for a (class, mode) pair
    ///
    /// Weather and a free runway gate every request. Normal requests also
    /// defer to an active emergency. Airplanes, emergency or not, defer to
    /// any queued helicopter.
    pub fn admits(&self, kind: AgentKind, mode: AgentMode) -> bool {
        let open = self.runway_free && self.weather_good;
        match (kind, mode) {
            (AgentKind::Helicopter, AgentMode::Emergency) => open,
            (AgentKind::Airplane, AgentMode::Emergency) => open && self.helicopters_waiting == 0,
            (AgentKind::Helicopter, AgentMode::Normal) => open && !self.emergency_active,
            (AgentKind::Airplane, AgentMode::Normal) => {
                open && !self.emergency_active && self.helicopters_waiting == 0
            }
        }
    }

    /// The single condition to signal when the runway is released
    pub fn wake_target(&self) -> WakeTarget {
        if self.emergency_active {
            WakeTarget::Emergency
        } else if self.helicopters_waiting > 0 {
            WakeTarget::Helicopter
        } else {
            WakeTarget::Airplane
        }
    }

    /// Count a normal-mode agent into its class queue
    pub(crate) fn enqueue(&mut self, kind: AgentKind) {
        match kind {
            AgentKind::Helicopter => self.helicopters_waiting += 1,
            AgentKind::Airplane => self.airplanes_waiting += 1,
        }
    }

    /// Count a normal-mode agent out of its class queue
    pub(crate) fn dequeue(&mut self, kind: AgentKind) {
        let counter = match kind {
            AgentKind::Helicopter => &mut self.helicopters_waiting,
            AgentKind::Airplane => &mut self.airplanes_waiting,
        };
        debug_assert!(*counter > 0, "{kind} waiting counter underflow");
        *counter = counter.saturating_sub(1);
    }

    pub fn snapshot(&self) -> AdmissionSnapshot {
        AdmissionSnapshot {
            runway_free: self.runway_free,
            helicopters_waiting: self.helicopters_waiting,
            airplanes_waiting: self.airplanes_waiting,
            emergency_active: self.emergency_active,
            weather_good: self.weather_good,
        }
    }
}

/// Point-in-time copy of the five admission fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AdmissionSnapshot {
    pub runway_free: bool,
    pub helicopters_waiting: u32,
    pub airplanes_waiting: u32,
    pub emergency_active: bool,
    pub weather_good: bool,
}

impl AdmissionSnapshot {
    /// No normal-mode agent is queued in either class
    pub fn queues_empty(&self) -> bool {
        self.helicopters_waiting == 0 && self.airplanes_waiting == 0
    }
}

impl fmt::Display for AdmissionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Runway: {}",
            if self.runway_free { "free" } else { "occupied" }
        )?;
        writeln!(f, "Helicopters waiting: {}", self.helicopters_waiting)?;
        writeln!(f, "Airplanes waiting: {}", self.airplanes_waiting)?;
        writeln!(
            f,
            "Emergency active: {}",
            if self.emergency_active { "yes" } else { "no" }
        )?;
        write!(
            f,
            "Weather: {}",
            if self.weather_good { "good" } else { "bad" }
        )
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
