//! QPS generator configuration

use serde::{Deserialize, Serialize};
use crate::error::{SimulationError, SimulatorResult};

/// Shape parameters for the synthetic QPS signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QpsConfig {
    /// Lower bound of the base rate draw (inclusive)
    pub base_rate_min: f64,
    /// Upper bound of the base rate draw (exclusive)
    pub base_rate_max: f64,
    /// First hour of the daytime peak window
    pub peak_start_hour: u32,
    /// Last hour of the daytime peak window (inclusive)
    pub peak_end_hour: u32,
    /// Height of the sine bump above 1.0 inside the peak window
    pub peak_amplitude: f64,
    /// Flat multiplier outside the peak window
    pub off_peak_factor: f64,
    /// Noise multiplier range
    pub noise_min: f64,
    pub noise_max: f64,
    /// Chance that a sample carries a traffic burst
    pub burst_probability: f64,
    /// Burst multiplier range
    pub burst_min: f64,
    pub burst_max: f64,
    /// Elapsed seconds after which smoothing fully adopts the raw rate
    pub smoothing_window_secs: f64,
    /// Window used when a caller does not supply one
    pub default_window_minutes: i64,
    /// Point count used when a caller does not supply one
    pub default_points: i64,
    /// Upper bound on points per series
    pub max_points: i64,
}

impl Default for QpsConfig {
    fn default() -> Self {
        Self {
            base_rate_min: 10.0,
            base_rate_max: 50.0,
            peak_start_hour: 9,
            peak_end_hour: 22,
            peak_amplitude: 0.5,
            off_peak_factor: 0.5,
            noise_min: 0.8,
            noise_max: 1.2,
            burst_probability: 0.05,
            burst_min: 1.5,
            burst_max: 2.5,
            smoothing_window_secs: 60.0,
            default_window_minutes: 5,
            default_points: 10,
            max_points: 10_000,
        }
    }
}

impl QpsConfig {
    pub fn validate(&self) -> SimulatorResult<()> {
        for (param, value) in [
            ("qps.base_rate_min", self.base_rate_min),
            ("qps.base_rate_max", self.base_rate_max),
            ("qps.peak_amplitude", self.peak_amplitude),
            ("qps.off_peak_factor", self.off_peak_factor),
            ("qps.noise_min", self.noise_min),
            ("qps.noise_max", self.noise_max),
            ("qps.burst_probability", self.burst_probability),
            ("qps.burst_min", self.burst_min),
            ("qps.burst_max", self.burst_max),
            ("qps.smoothing_window_secs", self.smoothing_window_secs),
        ] {
            if !value.is_finite() {
                return Err(invalid(param, format!("must be a finite number, got {}", value)));
            }
        }

        check_range("qps.base_rate", self.base_rate_min, self.base_rate_max)?;
        check_range("qps.noise", self.noise_min, self.noise_max)?;
        check_range("qps.burst", self.burst_min, self.burst_max)?;

        if self.base_rate_min < 0.0 {
            return Err(invalid("qps.base_rate_min", "base rate cannot be negative"));
        }
        if self.noise_min < 0.0 || self.burst_min < 0.0 {
            return Err(invalid("qps.noise_min", "multipliers cannot be negative"));
        }
        if self.peak_end_hour > 23 || self.peak_start_hour >= self.peak_end_hour {
            return Err(invalid(
                "qps.peak_start_hour",
                "peak window must satisfy start < end <= 23",
            ));
        }
        if !(0.0..=1.0).contains(&self.burst_probability) {
            return Err(invalid(
                "qps.burst_probability",
                "burst probability must be between 0.0 and 1.0",
            ));
        }
        if self.off_peak_factor < 0.0 || self.peak_amplitude < -1.0 {
            return Err(invalid(
                "qps.off_peak_factor",
                "diurnal factors must keep the rate non-negative",
            ));
        }
        if self.smoothing_window_secs <= 0.0 {
            return Err(invalid(
                "qps.smoothing_window_secs",
                "smoothing window must be greater than 0",
            ));
        }
        if self.max_points <= 0 {
            return Err(invalid("qps.max_points", "max_points must be greater than 0"));
        }
        if self.default_points <= 0 || self.default_points > self.max_points {
            return Err(invalid(
                "qps.default_points",
                "default_points must be in 1..=max_points",
            ));
        }
        if self.default_window_minutes <= 0 {
            return Err(invalid(
                "qps.default_window_minutes",
                "default window must be greater than 0",
            ));
        }
        Ok(())
    }
}

fn check_range(param: &str, min: f64, max: f64) -> SimulatorResult<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(invalid(param, format!("invalid range [{}, {})", min, max)));
    }
    Ok(())
}

fn invalid(param: &str, message: impl Into<String>) -> SimulationError {
    SimulationError::Config(format!("{}: {}", param, message.into()))
}
