//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Plain text or JSON console output
//! - Configurable log levels
//! - Optional local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use logvault::logging::init_logging;
//! use logvault::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export
///
/// # Example
///
/// ```no_run
/// use logvault::log_export_start;
///
/// log_export_start!("devops-veera", "devops", 1_699_913_600_000_i64, 1_700_000_000_000_i64);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($log_group:expr, $log_stream:expr, $start_ms:expr, $end_ms:expr) => {
        tracing::info!(
            log_group = %$log_group,
            log_stream = %$log_stream,
            start_ms = $start_ms,
            end_ms = $end_ms,
            "Starting log export"
        );
    };
}

/// Log the completion of an export
///
/// # Example
///
/// ```no_run
/// use logvault::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!("cloudwatch-logs/logs-1700000000.json.gz", 42, 1024, Duration::from_millis(350));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($key:expr, $records:expr, $bytes:expr, $duration:expr) => {
        tracing::info!(
            key = %$key,
            records = $records,
            compressed_bytes = $bytes,
            duration_ms = $duration.as_millis() as u64,
            "Log export completed"
        );
    };
}
