// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation driver
//!
//! Launches the configured fleet against one runway, one OS thread per
//! agent, then runs the weather oscillator and status monitor as tokio
//! tasks. The run ends when every agent has landed, when the monitor sees
//! both queues empty, or when the caller cancels the shutdown token.
//! Agents still parked at that point are left detached.

use crate::agent::{Agent, AgentKind};
use crate::config::{FleetConfig, SimulationConfig};
use crate::coordination::{
    AdmissionSnapshot, RandomWeather, Runway, StatusMonitor, StatusReport, WeatherOscillator,
    WeatherSource,
};
use crate::error::SimulationError;
use crate::event::{NoopObserver, RunwayObserver};
use crate::id::{AgentIdGen, SequentialAgentIds};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Progress reported by agent threads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flight {
    Acquired(Agent),
    Landed(Agent),
}

/// Why a simulation stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Every launched agent acquired and released the runway
    AllLanded,
    /// The status monitor found both queues empty
    MonitorShutdown,
    /// The caller cancelled the run
    Cancelled,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::AllLanded => "all aircraft landed",
            StopReason::MonitorShutdown => "no aircraft waiting",
            StopReason::Cancelled => "cancelled",
        })
    }
}

/// Outcome of a simulation run
#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub launched: usize,
    /// Agents in the order they acquired the runway
    pub admissions: Vec<Agent>,
    /// Agents in the order they released the runway
    pub landed: Vec<Agent>,
    pub stop: StopReason,
    pub final_state: AdmissionSnapshot,
}

impl SimulationReport {
    /// Agents launched but never granted the runway
    pub fn stranded(&self) -> usize {
        self.launched.saturating_sub(self.admissions.len())
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stopped: {}", self.stop)?;
        writeln!(
            f,
            "Launched: {}, used runway: {}, landed: {}",
            self.launched,
            self.admissions.len(),
            self.landed.len()
        )?;
        if self.stranded() > 0 {
            writeln!(f, "Never admitted: {}", self.stranded())?;
        }
        write!(f, "Admission order:")?;
        for agent in &self.admissions {
            write!(f, "\n  {agent}")?;
        }
        Ok(())
    }
}

pub struct Simulation<O: RunwayObserver = NoopObserver> {
    config: SimulationConfig,
    runway: Arc<Runway<O>>,
    shutdown: CancellationToken,
}

impl Simulation<NoopObserver> {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: RunwayObserver + 'static> Simulation<O> {
    pub fn with_observer(config: SimulationConfig, observer: O) -> Result<Self, SimulationError> {
        config.validate()?;
        let runway = Arc::new(Runway::with_observer(
            config.weather.initially_good,
            observer,
        ));
        Ok(Self {
            config,
            runway,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn runway(&self) -> &Arc<Runway<O>> {
        &self.runway
    }

    /// Token that stops the run when cancelled
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Agents in launch order: helicopters first, then airplanes
    pub fn fleet(&self) -> Vec<Agent> {
        let ids = SequentialAgentIds::default();
        let mut fleet = Vec::with_capacity(self.config.fleet_size() as usize);
        launch_plan(&ids, AgentKind::Helicopter, &self.config.helicopters, &mut fleet);
        launch_plan(&ids, AgentKind::Airplane, &self.config.airplanes, &mut fleet);
        fleet
    }

    /// Run with random weather drawn from the config
    pub async fn run(
        self,
        reports: mpsc::UnboundedSender<StatusReport>,
    ) -> Result<SimulationReport, SimulationError> {
        let weather = &self.config.weather;
        let source = RandomWeather::new(weather.min_interval, weather.max_interval, weather.seed);
        self.run_with_weather(source, reports).await
    }

    /// Run with the given weather source
    pub async fn run_with_weather<S: WeatherSource + 'static>(
        self,
        weather: S,
        reports: mpsc::UnboundedSender<StatusReport>,
    ) -> Result<SimulationReport, SimulationError> {
        let fleet = self.fleet();
        let (flights_tx, mut flights) = mpsc::unbounded_channel();

        tracing::info!(
            helicopters = self.config.helicopters.count,
            airplanes = self.config.airplanes.count,
            "launching fleet"
        );

        let mut launched = 0;
        for (position, agent) in fleet.iter().enumerate() {
            if position > 0 && !self.pause(self.config.launch_stagger).await {
                break;
            }
            self.launch(*agent, flights_tx.clone())?;
            launched += 1;
        }
        drop(flights_tx);

        let monitor_stop = self.shutdown.child_token();
        let weather_task = tokio::spawn(
            WeatherOscillator::new(Arc::clone(&self.runway), weather).run(self.shutdown.clone()),
        );
        let monitor_task = tokio::spawn(
            StatusMonitor::new(Arc::clone(&self.runway), self.config.monitor.interval)
                .run(monitor_stop.clone(), reports),
        );

        let mut admissions = Vec::with_capacity(launched);
        let mut landed = Vec::with_capacity(launched);
        let stop = loop {
            tokio::select! {
                flight = flights.recv() => match flight {
                    Some(Flight::Acquired(agent)) => admissions.push(agent),
                    Some(Flight::Landed(agent)) => landed.push(agent),
                    None => break StopReason::AllLanded,
                },
                _ = monitor_stop.cancelled() => {
                    break if self.shutdown.is_cancelled() {
                        StopReason::Cancelled
                    } else {
                        StopReason::MonitorShutdown
                    };
                }
            }
        };

        self.shutdown.cancel();
        for (name, task) in [("weather", weather_task), ("monitor", monitor_task)] {
            if let Err(e) = task.await {
                tracing::warn!(task = name, error = %e, "background task failed");
            }
        }
        while let Ok(flight) = flights.try_recv() {
            match flight {
                Flight::Acquired(agent) => admissions.push(agent),
                Flight::Landed(agent) => landed.push(agent),
            }
        }

        tracing::info!(
            %stop,
            admitted = admissions.len(),
            landed = landed.len(),
            "simulation finished"
        );

        Ok(SimulationReport {
            launched,
            admissions,
            landed,
            stop,
            final_state: self.runway.report_state(),
        })
    }

    /// Sleep unless cancelled first; returns false on cancellation
    async fn pause(&self, duration: Duration) -> bool {
        tokio::select! {
            _ = self.shutdown.cancelled() => false,
            _ = tokio::time::sleep(duration) => true,
        }
    }

    fn launch(
        &self,
        agent: Agent,
        flights: mpsc::UnboundedSender<Flight>,
    ) -> Result<(), SimulationError> {
        let runway = Arc::clone(&self.runway);
        let occupy = self.config.occupy;
        std::thread::Builder::new()
            .name(format!("{}-{}", agent.kind, agent.id))
            .spawn(move || {
                runway.acquire(&agent);
                let _ = flights.send(Flight::Acquired(agent));
                std::thread::sleep(occupy);
                runway.release(&agent);
                let _ = flights.send(Flight::Landed(agent));
            })
            .map_err(|source| SimulationError::Spawn {
                agent: agent.to_string(),
                source,
            })?;
        Ok(())
    }
}

fn launch_plan(
    ids: &impl AgentIdGen,
    kind: AgentKind,
    fleet: &FleetConfig,
    plan: &mut Vec<Agent>,
) {
    for _ in 0..fleet.count {
        let id = ids.next();
        plan.push(Agent {
            id,
            kind,
            mode: fleet.emergency.mode_at(id.0),
        });
    }
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod tests;
