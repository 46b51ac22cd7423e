// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runway events and observers
//!
//! The runway reports every state transition to its observer while still
//! holding the admission lock, so observers see a totally ordered history
//! in which each event carries the state it produced.

use crate::agent::Agent;
use crate::coordination::{AdmissionSnapshot, WakeTarget};
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// A transition of the admission state
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunwayEvent {
    /// Agent entered `acquire` and registered its request
    Requested {
        agent: Agent,
        state: AdmissionSnapshot,
    },
    /// Agent found its predicate false and is about to park
    Waiting {
        agent: Agent,
        state: AdmissionSnapshot,
    },
    /// Agent returned from a wait and will re-check its predicate
    Woken {
        agent: Agent,
        state: AdmissionSnapshot,
    },
    /// Agent now holds the runway
    Acquired {
        agent: Agent,
        state: AdmissionSnapshot,
    },
    /// Agent gave the runway back and one condition was signalled
    Released {
        agent: Agent,
        signalled: WakeTarget,
        state: AdmissionSnapshot,
    },
    /// Weather flag was set by the oscillator
    WeatherChanged {
        good: bool,
        state: AdmissionSnapshot,
    },
}

impl RunwayEvent {
    /// Event name for logging (e.g. "runway:acquired")
    pub fn name(&self) -> &'static str {
        match self {
            RunwayEvent::Requested { .. } => "runway:requested",
            RunwayEvent::Waiting { .. } => "runway:waiting",
            RunwayEvent::Woken { .. } => "runway:woken",
            RunwayEvent::Acquired { .. } => "runway:acquired",
            RunwayEvent::Released { .. } => "runway:released",
            RunwayEvent::WeatherChanged { .. } => "weather:changed",
        }
    }

    pub fn agent(&self) -> Option<&Agent> {
        match self {
            RunwayEvent::Requested { agent, .. }
            | RunwayEvent::Waiting { agent, .. }
            | RunwayEvent::Woken { agent, .. }
            | RunwayEvent::Acquired { agent, .. }
            | RunwayEvent::Released { agent, .. } => Some(agent),
            RunwayEvent::WeatherChanged { .. } => None,
        }
    }

    /// Admission state right after this event
    pub fn state(&self) -> &AdmissionSnapshot {
        match self {
            RunwayEvent::Requested { state, .. }
            | RunwayEvent::Waiting { state, .. }
            | RunwayEvent::Woken { state, .. }
            | RunwayEvent::Acquired { state, .. }
            | RunwayEvent::Released { state, .. }
            | RunwayEvent::WeatherChanged { state, .. } => state,
        }
    }
}

/// Receives runway events; called with the admission lock held
///
/// Implementations must not call back into the runway.
pub trait RunwayObserver: Send + Sync {
    fn on_event(&self, event: &RunwayEvent);
}

/// Observer that ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RunwayObserver for NoopObserver {
    fn on_event(&self, _event: &RunwayEvent) {}
}

/// Observer that keeps every event, for tests and post-run inspection
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<RunwayEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, in order
    pub fn events(&self) -> Vec<RunwayEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Agents in the order they acquired the runway
    pub fn admissions(&self) -> Vec<Agent> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RunwayEvent::Acquired { agent, .. } => Some(agent),
                _ => None,
            })
            .collect()
    }
}

impl RunwayObserver for RecordingObserver {
    fn on_event(&self, event: &RunwayEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
    }
}

impl<T: RunwayObserver + ?Sized> RunwayObserver for Arc<T> {
    fn on_event(&self, event: &RunwayEvent) {
        (**self).on_event(event)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
