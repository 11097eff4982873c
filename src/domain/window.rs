//! Export window
//!
//! The trailing time range, in epoch milliseconds, requested from the log
//! source on each invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default lookback of one day
pub const DEFAULT_LOOKBACK_SECONDS: i64 = 86_400;

/// Longest accepted lookback, 14 days
pub const MAX_LOOKBACK_SECONDS: i64 = 14 * 86_400;

/// Half-open interval `[start_ms, end_ms)` in epoch milliseconds
///
/// Both bounds are computed from the invocation time truncated to whole
/// seconds, so they are always exact multiples of 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportWindow {
    /// Inclusive start, epoch milliseconds
    pub start_ms: i64,

    /// Exclusive end, epoch milliseconds
    pub end_ms: i64,
}

impl ExportWindow {
    /// Builds the window ending at `now` and reaching back `lookback_seconds`
    ///
    /// Sub-second precision is dropped before the subtraction. The start is
    /// clamped to the epoch and both bounds saturate instead of overflowing.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use logvault::domain::ExportWindow;
    ///
    /// let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    /// let window = ExportWindow::ending_at(now, 86_400);
    /// assert_eq!(window.start_ms, 1_699_913_600_000);
    /// assert_eq!(window.end_ms, 1_700_000_000_000);
    /// ```
    pub fn ending_at(now: DateTime<Utc>, lookback_seconds: i64) -> Self {
        let now_secs = now.timestamp().max(0);
        let start_secs = now_secs.saturating_sub(lookback_seconds.max(0)).max(0);
        Self {
            start_ms: start_secs.saturating_mul(1000),
            end_ms: now_secs.saturating_mul(1000),
        }
    }

    /// Returns true if `timestamp_ms` falls inside the window
    pub fn contains(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_ms && timestamp_ms < self.end_ms
    }

    /// Window length in whole seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.end_ms - self.start_ms) / 1000
    }
}

impl fmt::Display for ExportWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_ms, self.end_ms)
    }
}
