//! Time source for window and key computation

use chrono::{DateTime, TimeZone, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to `at`
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Pins the clock to whole epoch seconds plus `nanos`
    ///
    /// Returns `None` if the instant is out of range.
    pub fn at_epoch(seconds: i64, nanos: u32) -> Option<Self> {
        Utc.timestamp_opt(seconds, nanos).single().map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
