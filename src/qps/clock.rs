//! Wall-clock sources

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDateTime};
use parking_lot::Mutex;

/// Clock handle shared between the generator and the mock services
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Provides the current local wall-clock time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Reads the host's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock for tests and replays
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Jump to an absolute time (may go backwards)
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }

    /// Move the clock by `delta`
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock();
        *now += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}
