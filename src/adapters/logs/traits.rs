//! Log source abstraction
//!
//! This module defines the trait log-aggregation backends implement so the
//! export job can be driven against CloudWatch Logs or an in-memory double.

use crate::domain::{ExportWindow, LogRecord, Result};
use async_trait::async_trait;

/// Parameters of a single log read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Log group name
    pub log_group: String,

    /// Log stream name
    pub log_stream: String,

    /// Time range to read
    pub window: ExportWindow,

    /// Maximum number of events to return
    pub limit: usize,

    /// Read from the oldest event forward instead of the newest backward
    pub start_from_head: bool,
}

/// Log source trait
///
/// Implementations return a single page of at most `limit` events. Anything
/// beyond the first page is dropped.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Fetch events for one stream within the request window
    ///
    /// # Errors
    ///
    /// Returns a [`LogSourceError`](crate::domain::LogSourceError) wrapped in
    /// `LogVaultError` when the read fails.
    async fn fetch_events(&self, request: &FetchRequest) -> Result<Vec<LogRecord>>;

    /// Verify the group and stream exist and are readable
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be found or read.
    async fn check_access(&self, log_group: &str, log_stream: &str) -> Result<()>;
}
