// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status monitor
//!
//! Periodically snapshots the runway for reporting and signals shutdown the
//! first time no normal-mode agent is queued in either class.

use super::runway::Runway;
use super::state::AdmissionSnapshot;
use crate::event::RunwayObserver;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// What the monitor decided on a check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorVerdict {
    /// Agents are still queued
    Continue,
    /// Queues are empty; shutdown is signalled with this report
    Shutdown,
    /// Shutdown was already signalled by an earlier check
    Stopped,
}

/// One periodic status report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub sequence: u64,
    pub state: AdmissionSnapshot,
    pub verdict: MonitorVerdict,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== RUNWAY STATUS #{} ===", self.sequence)?;
        writeln!(f, "{}", self.state)?;
        write!(f, "========================")?;
        if self.verdict == MonitorVerdict::Shutdown {
            write!(f, "\nNo aircraft waiting. Shutting down.")?;
        }
        Ok(())
    }
}

pub struct StatusMonitor<O: RunwayObserver> {
    runway: Arc<Runway<O>>,
    interval: Duration,
    sequence: u64,
    shutdown_signalled: bool,
}

impl<O: RunwayObserver> StatusMonitor<O> {
    pub fn new(runway: Arc<Runway<O>>, interval: Duration) -> Self {
        Self {
            runway,
            interval,
            sequence: 0,
            shutdown_signalled: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Snapshot the runway and decide whether to shut down
    pub fn check(&mut self) -> StatusReport {
        let state = self.runway.report_state();
        self.sequence += 1;

        let verdict = if self.shutdown_signalled {
            MonitorVerdict::Stopped
        } else if state.queues_empty() {
            self.shutdown_signalled = true;
            MonitorVerdict::Shutdown
        } else {
            MonitorVerdict::Continue
        };

        StatusReport {
            sequence: self.sequence,
            state,
            verdict,
        }
    }

    /// Report every interval until queues drain or `shutdown` is cancelled
    ///
    /// Cancels `shutdown` itself when it decides to stop. Reports are
    /// dropped silently if the receiver has gone away.
    pub async fn run(
        mut self,
        shutdown: CancellationToken,
        reports: mpsc::UnboundedSender<StatusReport>,
    ) {
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }

            let report = self.check();
            tracing::debug!(
                sequence = report.sequence,
                helicopters_waiting = report.state.helicopters_waiting,
                airplanes_waiting = report.state.airplanes_waiting,
                "status check"
            );
            let _ = reports.send(report);

            if report.verdict == MonitorVerdict::Shutdown {
                tracing::info!("no aircraft waiting, signalling shutdown");
                shutdown.cancel();
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
