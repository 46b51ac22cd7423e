// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runway arbiter: priority admission over a single exclusive resource
//!
//! One mutex guards the [`AdmissionState`]. Waiting agents park on one of
//! three conditions (emergency, helicopter, airplane) and always re-check
//! their admission predicate after waking. A release signals exactly one
//! condition, chosen by [`AdmissionState::wake_target`]; only an improving
//! weather broadcast wakes a whole class.
//!
//! # Contract
//!
//! Each agent calls [`Runway::acquire`] once and then [`Runway::release`]
//! once. Releasing without holding the runway, or acquiring twice for one
//! agent id, corrupts the waiting counters; debug builds assert on both.

use super::state::{AdmissionSnapshot, AdmissionState, WakeTarget};
use crate::agent::{Agent, AgentMode};
use crate::event::{NoopObserver, RunwayEvent, RunwayObserver};
use std::sync::{Condvar, Mutex, MutexGuard};

/// The shared runway with its admission lock and wait conditions
pub struct Runway<O: RunwayObserver = NoopObserver> {
    state: Mutex<AdmissionState>,
    emergency: Condvar,
    helicopters: Condvar,
    airplanes: Condvar,
    observer: O,
}

impl Runway<NoopObserver> {
    pub fn new(weather_good: bool) -> Self {
        Self::with_observer(weather_good, NoopObserver)
    }
}

impl Default for Runway<NoopObserver> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<O: RunwayObserver> Runway<O> {
    pub fn with_observer(weather_good: bool, observer: O) -> Self {
        Self {
            state: Mutex::new(AdmissionState::new(weather_good)),
            emergency: Condvar::new(),
            helicopters: Condvar::new(),
            airplanes: Condvar::new(),
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn lock(&self) -> MutexGuard<'_, AdmissionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn condition(&self, target: WakeTarget) -> &Condvar {
        match target {
            WakeTarget::Emergency => &self.emergency,
            WakeTarget::Helicopter => &self.helicopters,
            WakeTarget::Airplane => &self.airplanes,
        }
    }

    /// Block until `agent` holds the runway
    pub fn acquire(&self, agent: &Agent) {
        let mut state = self.lock();
        let newly_in_flight = state.in_flight.insert(agent.id);
        debug_assert!(newly_in_flight, "{agent} acquired twice concurrently");

        match agent.mode {
            AgentMode::Emergency => {
                tracing::info!(%agent, "emergency, requesting runway immediately");
                state.emergency_active = true;
            }
            AgentMode::Normal => {
                tracing::info!(%agent, "waiting for runway");
                state.enqueue(agent.kind);
            }
        }
        self.emit(RunwayEvent::Requested {
            agent: *agent,
            state: state.snapshot(),
        });

        let condition = self.condition(WakeTarget::for_agent(agent));
        while !state.admits(agent.kind, agent.mode) {
            self.emit(RunwayEvent::Waiting {
                agent: *agent,
                state: state.snapshot(),
            });
            tracing::debug!(%agent, "parked");
            state = condition.wait(state).unwrap_or_else(|e| e.into_inner());
            tracing::debug!(%agent, "woken, re-checking admission");
            self.emit(RunwayEvent::Woken {
                agent: *agent,
                state: state.snapshot(),
            });
        }

        match agent.mode {
            AgentMode::Emergency => state.emergency_active = false,
            AgentMode::Normal => state.dequeue(agent.kind),
        }
        state.runway_free = false;
        state.holder = Some(agent.id);

        tracing::info!(%agent, "using runway");
        self.emit(RunwayEvent::Acquired {
            agent: *agent,
            state: state.snapshot(),
        });
    }

    /// Give the runway back and wake the highest-priority waiting class
    pub fn release(&self, agent: &Agent) {
        let mut state = self.lock();
        debug_assert_eq!(
            state.holder,
            Some(agent.id),
            "{agent} released a runway it does not hold"
        );

        state.runway_free = true;
        state.holder = None;
        state.in_flight.remove(&agent.id);

        let target = state.wake_target();
        self.condition(target).notify_one();

        tracing::info!(%agent, signalled = ?target, "released runway");
        self.emit(RunwayEvent::Released {
            agent: *agent,
            signalled: target,
            state: state.snapshot(),
        });
    }

    /// Set the weather flag; an improvement wakes every normal waiter
    ///
    /// The emergency condition is not signalled here. An emergency agent
    /// held only by bad weather stays parked until the next release.
    pub fn set_weather(&self, good: bool) {
        let mut state = self.lock();
        state.weather_good = good;
        if good {
            tracing::info!("weather improved, runway open");
            self.airplanes.notify_all();
            self.helicopters.notify_all();
        } else {
            tracing::info!("bad weather, runway closed");
        }
        self.emit(RunwayEvent::WeatherChanged {
            good,
            state: state.snapshot(),
        });
    }

    /// Consistent copy of the five admission fields
    pub fn report_state(&self) -> AdmissionSnapshot {
        self.lock().snapshot()
    }

    fn emit(&self, event: RunwayEvent) {
        self.observer.on_event(&event);
    }
}

#[cfg(test)]
#[path = "runway_tests.rs"]
mod tests;
