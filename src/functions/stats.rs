//! Dispatch counters

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Thread-safe dispatch tracking
#[derive(Default)]
pub struct DispatchStats {
    total_calls: AtomicU64,
    total_errors: AtomicU64,
    per_function: RwLock<BTreeMap<String, u64>>,
}

impl DispatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dispatch attempt for `function`
    pub fn record_call(&self, function: &str) {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
        *self.per_function.write().entry(function.to_string()).or_insert(0) += 1;
    }

    pub fn record_error(&self) {
        self.total_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DispatchSnapshot {
        DispatchSnapshot {
            total_calls: self.total_calls.load(Ordering::Relaxed),
            total_errors: self.total_errors.load(Ordering::Relaxed),
            per_function: self.per_function.read().clone(),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.total_calls.store(0, Ordering::Relaxed);
        self.total_errors.store(0, Ordering::Relaxed);
        self.per_function.write().clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchSnapshot {
    pub total_calls: u64,
    pub total_errors: u64,
    pub per_function: BTreeMap<String, u64>,
}

impl DispatchSnapshot {
    pub fn error_rate(&self) -> f64 {
        if self.total_calls == 0 {
            0.0
        } else {
            self.total_errors as f64 / self.total_calls as f64
        }
    }
}
