// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

//! Concurrent property checks for the runway arbiter
//!
//! Many normal-mode agents race for the runway while the weather flips.
//! The recorded event history is then replayed to check mutual exclusion,
//! weather gating and waiting-counter accuracy at every transition.

use runway_core::{Agent, AgentId, AgentKind, RecordingObserver, Runway, RunwayEvent};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

fn fleet(size: u32) -> Vec<Agent> {
    (0..size)
        .map(|id| {
            if id % 3 == 0 {
                Agent::airplane(id)
            } else {
                Agent::helicopter(id)
            }
        })
        .collect()
}

/// Run every agent to completion while a flipper thread toggles weather
fn run_fleet(agents: Vec<Agent>, flips: usize) -> RecordingObserver {
    let observer = RecordingObserver::new();
    let runway = Arc::new(Runway::with_observer(true, observer.clone()));

    let handles: Vec<_> = agents
        .into_iter()
        .map(|agent| {
            let runway = Arc::clone(&runway);
            std::thread::spawn(move || {
                runway.acquire(&agent);
                std::thread::sleep(Duration::from_micros(200));
                runway.release(&agent);
            })
        })
        .collect();

    let flipper = {
        let runway = Arc::clone(&runway);
        std::thread::spawn(move || {
            for i in 0..flips {
                runway.set_weather(i % 2 == 1);
                std::thread::sleep(Duration::from_micros(500));
            }
            // Leave the weather good so every waiter can finish
            runway.set_weather(true);
        })
    };

    flipper.join().unwrap();
    for handle in handles {
        handle.join().unwrap();
    }

    let state = runway.report_state();
    assert!(state.runway_free);
    assert!(state.queues_empty());
    observer
}

fn replay(observer: &RecordingObserver) {
    let mut queued_helicopters: HashSet<AgentId> = HashSet::new();
    let mut queued_airplanes: HashSet<AgentId> = HashSet::new();
    let mut holder: Option<AgentId> = None;

    for event in observer.events() {
        match &event {
            RunwayEvent::Requested { agent, .. } if !agent.is_emergency() => {
                let queue = match agent.kind {
                    AgentKind::Helicopter => &mut queued_helicopters,
                    AgentKind::Airplane => &mut queued_airplanes,
                };
                assert!(queue.insert(agent.id));
            }
            RunwayEvent::Acquired { agent, state } => {
                assert!(holder.is_none(), "{agent} acquired while runway held");
                assert!(state.weather_good, "{agent} acquired in bad weather");
                assert!(!state.runway_free);
                holder = Some(agent.id);
                queued_helicopters.remove(&agent.id);
                queued_airplanes.remove(&agent.id);
            }
            RunwayEvent::Released { agent, state, .. } => {
                assert_eq!(holder.take(), Some(agent.id));
                assert!(state.runway_free);
            }
            _ => {}
        }

        let state = event.state();
        assert_eq!(
            state.helicopters_waiting as usize,
            queued_helicopters.len(),
            "helicopter counter drifted at {}",
            event.name()
        );
        assert_eq!(
            state.airplanes_waiting as usize,
            queued_airplanes.len(),
            "airplane counter drifted at {}",
            event.name()
        );
    }

    assert!(holder.is_none());
}

#[test]
fn normal_fleet_in_good_weather_completes_with_exclusive_access() {
    let observer = run_fleet(fleet(24), 0);
    replay(&observer);
    assert_eq!(observer.admissions().len(), 24);
}

#[test]
fn flipping_weather_never_admits_in_bad_weather() {
    let observer = run_fleet(fleet(24), 40);
    replay(&observer);
    assert_eq!(observer.admissions().len(), 24);
}

#[test]
fn every_admission_is_unique() {
    let observer = run_fleet(fleet(16), 10);
    let admitted: HashSet<AgentId> = observer.admissions().iter().map(|a| a.id).collect();
    assert_eq!(admitted.len(), 16);
}
