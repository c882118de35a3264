//! Injectable time source
//!
//! Every TTL decision in the service goes through a [`Clock`] so tests can
//! move time forward without sleeping.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

/// Source of the current time
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;

    /// Current time as whole epoch seconds
    fn timestamp(&self) -> i64 {
        self.now().timestamp()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for deterministic tests
#[derive(Debug)]
pub struct ManualClock {
    current: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: RwLock::new(start),
        }
    }

    /// Start from the current wall-clock time
    pub fn starting_now() -> Self {
        Self::new(Utc::now())
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.write() = instant;
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.write();
        *current += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.read()
    }
}
