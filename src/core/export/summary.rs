//! Export summary and reporting
//!
//! This module defines the per-invocation report that is logged after each
//! export. It is never part of the invocation response.

use crate::domain::{ExportWindow, ObjectKey};
use crate::log_export_complete;
use std::time::Duration;

/// Summary of one export invocation
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Object key the artifact was (or would have been) written to
    pub key: ObjectKey,

    /// Time range that was read
    pub window: ExportWindow,

    /// Number of records exported
    pub record_count: usize,

    /// JSON payload size before compression
    pub payload_bytes: usize,

    /// Compressed object size
    pub compressed_bytes: usize,

    /// Whether the upload was skipped
    pub dry_run: bool,

    /// Wall time of the invocation
    pub duration: Duration,
}

impl ExportReport {
    /// Compression ratio as compressed / payload, 0.0 for an empty payload
    pub fn compression_ratio(&self) -> f64 {
        if self.payload_bytes == 0 {
            return 0.0;
        }
        self.compressed_bytes as f64 / self.payload_bytes as f64
    }

    /// Log the report
    pub fn log_summary(&self) {
        if self.dry_run {
            tracing::info!(
                key = %self.key,
                records = self.record_count,
                payload_bytes = self.payload_bytes,
                compressed_bytes = self.compressed_bytes,
                "Dry run: upload skipped"
            );
            return;
        }

        log_export_complete!(
            self.key,
            self.record_count,
            self.compressed_bytes,
            self.duration
        );

        tracing::debug!(
            window = %self.window,
            payload_bytes = self.payload_bytes,
            compression_ratio = format!("{:.3}", self.compression_ratio()),
            "Export details"
        );

        if self.record_count == 0 {
            tracing::warn!(key = %self.key, "No log events in window, wrote empty array");
        }
    }
}
