//! Synthetic QPS time-series generation
//!
//! The generator keeps a smoothed rate that evolves across calls. Each sample
//! combines a base rate with a diurnal curve, per-sample noise and rare
//! bursts, then folds the result into the smoothed rate with an exponential
//! moving average whose weight grows with elapsed time.

mod clock;
mod source;

pub use clock::*;
pub use source::*;

use std::f64::consts::PI;

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::QpsConfig;
use crate::error::{SimulationError, SimulatorResult};
use crate::types::{SamplePoint, SeriesResponse};

/// Mutable state of one generator instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorState {
    /// Quiet-period throughput, fixed for the instance's lifetime
    pub base_rate: f64,
    /// Smoothed, externally observable rate
    pub current_rate: f64,
    /// Timestamp of the last smoothing update
    pub last_update: NaiveDateTime,
}

impl GeneratorState {
    fn new(base_rate: f64, now: NaiveDateTime) -> Self {
        Self {
            base_rate,
            current_rate: base_rate,
            last_update: now,
        }
    }
}

/// Stateful QPS series generator
///
/// Not internally synchronized: callers sharing an instance must serialize
/// access (the server wraps it in a mutex).
pub struct QpsGenerator<R = RngSource, C = SystemClock> {
    config: QpsConfig,
    state: GeneratorState,
    rng: R,
    clock: C,
}

/// Type-erased generator used by the router and server
pub type DynGenerator = QpsGenerator<Box<dyn RandomSource + Send>, SharedClock>;

impl QpsGenerator {
    /// Create a generator with entropy-seeded randomness and the system clock
    pub fn new(config: QpsConfig) -> Self {
        Self::with_sources(config, RngSource::new(), SystemClock)
    }

    /// Create a generator with a fixed seed for deterministic behavior
    pub fn with_seed(config: QpsConfig, seed: u64) -> Self {
        Self::with_sources(config, RngSource::with_seed(seed), SystemClock)
    }
}

impl Default for QpsGenerator {
    fn default() -> Self {
        Self::new(QpsConfig::default())
    }
}

impl<R: RandomSource, C: Clock> QpsGenerator<R, C> {
    /// Create a generator from explicit randomness and time sources
    ///
    /// The base rate is drawn from `rng` and `last_update` is read from
    /// `clock`.
    pub fn with_sources(config: QpsConfig, mut rng: R, clock: C) -> Self {
        let base_rate = rng.uniform(config.base_rate_min, config.base_rate_max);
        let now = clock.now();

        debug!(base_rate, started_at = %now, "QPS generator initialized");

        Self {
            config,
            state: GeneratorState::new(base_rate, now),
            rng,
            clock,
        }
    }

    /// Replace the drawn base rate, resetting the smoothed rate to match
    pub fn with_base_rate(mut self, base_rate: f64) -> Self {
        self.state = GeneratorState::new(base_rate, self.state.last_update);
        self
    }

    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    pub fn config(&self) -> &QpsConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Diurnal multiplier for an hour of day
    pub fn time_factor(&self, hour: u32) -> f64 {
        diurnal_factor(&self.config, hour)
    }

    /// Advance the smoothed rate to `timestamp` and return it
    ///
    /// Noise and burst are drawn on every call. The moving average only
    /// moves when `timestamp` is later than the last update; otherwise the
    /// state is left untouched and the current rate is returned.
    pub(crate) fn sample(&mut self, timestamp: NaiveDateTime) -> f64 {
        let time_factor = self.time_factor(timestamp.hour());
        let noise = self.rng.uniform(self.config.noise_min, self.config.noise_max);
        let burst = if self.rng.probability(self.config.burst_probability) {
            let burst = self.rng.uniform(self.config.burst_min, self.config.burst_max);
            trace!(%timestamp, burst, "traffic burst");
            burst
        } else {
            1.0
        };

        let raw = self.state.base_rate * time_factor * noise * burst;

        let elapsed = timestamp - self.state.last_update;
        let dt = match elapsed.num_microseconds() {
            Some(us) => us as f64 / 1_000_000.0,
            None => elapsed.num_milliseconds() as f64 / 1000.0,
        };
        if dt > 0.0 {
            let alpha = (dt / self.config.smoothing_window_secs).min(1.0);
            self.state.current_rate = (1.0 - alpha) * self.state.current_rate + alpha * raw;
            self.state.last_update = timestamp;
        }

        round2(self.state.current_rate)
    }

    /// Generate `point_count` evenly spaced samples over the last
    /// `time_window_minutes`
    ///
    /// Timestamps cover `[now - window, now)`; `now` itself is never
    /// sampled. Non-positive inputs, or more points than `max_points`, are
    /// rejected.
    pub fn calculate_series(
        &mut self,
        time_window_minutes: i64,
        point_count: i64,
    ) -> SimulatorResult<SeriesResponse> {
        if time_window_minutes <= 0 {
            return Err(SimulationError::invalid_argument(
                "time_window_minutes",
                format!("time window must be positive, got {}", time_window_minutes),
            ));
        }
        if point_count <= 0 {
            return Err(SimulationError::invalid_argument(
                "data_points",
                format!("point count must be positive, got {}", point_count),
            ));
        }
        if point_count > self.config.max_points {
            return Err(SimulationError::invalid_argument(
                "data_points",
                format!(
                    "point count {} exceeds the maximum of {}",
                    point_count, self.config.max_points
                ),
            ));
        }

        let window = Duration::try_minutes(time_window_minutes)
            .and_then(|w| w.num_microseconds().map(|us| (w, us)));
        let (window, window_us) = window.ok_or_else(|| {
            SimulationError::invalid_argument("time_window_minutes", "time window is too large")
        })?;

        let end_time = self.clock.now();
        let start_time = end_time.checked_sub_signed(window).ok_or_else(|| {
            SimulationError::invalid_argument("time_window_minutes", "time window is too large")
        })?;

        let step_us = window_us as f64 / point_count as f64;
        let mut data = Vec::with_capacity(point_count as usize);
        for i in 0..point_count {
            let offset = Duration::microseconds((i as f64 * step_us).round() as i64);
            let timestamp = start_time + offset;
            let qps_value = self.sample(timestamp);
            data.push(SamplePoint { timestamp, qps_value });
        }

        debug!(
            time_window_minutes,
            point_count,
            current_rate = self.state.current_rate,
            "QPS series generated"
        );

        Ok(SeriesResponse::success(
            format!(
                "QPS data retrieved for the last {} minutes ({} points)",
                time_window_minutes, point_count
            ),
            data,
        ))
    }
}

/// Diurnal multiplier: a half-sine bump over the peak window, flat outside it
pub fn diurnal_factor(config: &QpsConfig, hour: u32) -> f64 {
    let (start, end) = (config.peak_start_hour, config.peak_end_hour);
    if (start..=end).contains(&hour) {
        let phase = (hour - start) as f64 / (end - start) as f64;
        1.0 + config.peak_amplitude * (PI * phase).sin()
    } else {
        config.off_peak_factor
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
