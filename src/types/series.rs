//! QPS series response types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Display format for sample timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome of a series request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesStatus {
    Success,
    Error,
}

impl std::fmt::Display for SeriesStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single throughput measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub timestamp: NaiveDateTime,
    pub qps_value: f64,
}

impl std::fmt::Display for SamplePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  QPS: {:.2}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.qps_value
        )
    }
}

/// Series returned by `calculate_series`, oldest sample first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub status: SeriesStatus,
    pub message: String,
    pub data: Vec<SamplePoint>,
}

impl SeriesResponse {
    pub fn success(message: impl Into<String>, data: Vec<SamplePoint>) -> Self {
        Self {
            status: SeriesStatus::Success,
            message: message.into(),
            data,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SeriesStatus::Success
    }

    /// Min/max/mean over the returned values
    pub fn summary(&self) -> Option<SeriesSummary> {
        if self.data.is_empty() {
            return None;
        }

        let values = self.data.iter().map(|p| p.qps_value);
        let min = values.clone().fold(f64::INFINITY, f64::min);
        let max = values.clone().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.sum::<f64>() / self.data.len() as f64;

        Some(SeriesSummary {
            points: self.data.len(),
            min,
            max,
            mean,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub points: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}
