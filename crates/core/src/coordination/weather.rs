// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Weather oscillator
//!
//! Background task that periodically redraws the weather flag. Each tick
//! goes through [`Runway::set_weather`], so an improvement wakes every
//! normal-mode waiter.

use super::runway::Runway;
use crate::event::RunwayObserver;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Supplies the oscillator's timing and weather draws
pub trait WeatherSource: Send {
    /// How long to sleep before the next tick
    fn next_interval(&mut self) -> Duration;
    /// Weather for the next tick; `true` is good
    fn next_condition(&mut self) -> bool;
}

/// Uniformly random interval and a fair coin for the weather
pub struct RandomWeather {
    rng: StdRng,
    min_interval: Duration,
    max_interval: Duration,
}

impl RandomWeather {
    pub fn new(min_interval: Duration, max_interval: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            min_interval,
            max_interval: max_interval.max(min_interval),
        }
    }
}

impl WeatherSource for RandomWeather {
    fn next_interval(&mut self) -> Duration {
        if self.min_interval == self.max_interval {
            return self.min_interval;
        }
        self.rng.gen_range(self.min_interval..=self.max_interval)
    }

    fn next_condition(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Plays back a fixed sequence of conditions, then repeats a fallback
#[derive(Clone, Debug)]
pub struct ScriptedWeather {
    interval: Duration,
    script: VecDeque<bool>,
    then: bool,
}

impl ScriptedWeather {
    pub fn new(interval: Duration, script: impl IntoIterator<Item = bool>, then: bool) -> Self {
        Self {
            interval,
            script: script.into_iter().collect(),
            then,
        }
    }

    /// Weather that never changes
    pub fn constant(interval: Duration, good: bool) -> Self {
        Self::new(interval, std::iter::empty(), good)
    }
}

impl WeatherSource for ScriptedWeather {
    fn next_interval(&mut self) -> Duration {
        self.interval
    }

    fn next_condition(&mut self) -> bool {
        self.script.pop_front().unwrap_or(self.then)
    }
}

/// Periodically flips the runway's weather flag
pub struct WeatherOscillator<S: WeatherSource, O: RunwayObserver> {
    runway: Arc<Runway<O>>,
    source: S,
}

impl<S: WeatherSource, O: RunwayObserver> WeatherOscillator<S, O> {
    pub fn new(runway: Arc<Runway<O>>, source: S) -> Self {
        Self { runway, source }
    }

    /// Draw the next condition and apply it; returns the new weather
    pub fn tick(&mut self) -> bool {
        let good = self.source.next_condition();
        self.runway.set_weather(good);
        good
    }

    /// Tick on the source's schedule until `shutdown` is cancelled
    pub async fn run(mut self, shutdown: CancellationToken) {
        loop {
            let interval = self.source.next_interval();
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(interval) => {
                    self.tick();
                }
            }
        }
        tracing::debug!("weather oscillator stopped");
    }
}

#[cfg(test)]
#[path = "weather_tests.rs"]
mod tests;
