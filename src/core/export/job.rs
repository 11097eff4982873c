//! Export job - orchestrates a single read, compress and upload
//!
//! One invocation reads the current time once, derives both the query window
//! and the object key from it, performs a single log read and a single
//! object write. Any failure aborts the invocation before the write.

use crate::adapters::factory::ExportClients;
use crate::adapters::logs::{FetchRequest, LogSource};
use crate::adapters::storage::{ObjectStore, PutRequest};
use crate::config::LogVaultConfig;
use crate::core::artifact::ExportArtifact;
use crate::core::clock::Clock;
use crate::core::export::summary::ExportReport;
use crate::domain::{
    ExportWindow, InvocationContext, InvocationResponse, LogVaultError, ObjectKey, Result,
    Trigger,
};
use crate::log_export_start;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Log export job
///
/// Holds long-lived client handles so warm invocations reuse them.
pub struct ExportJob {
    config: LogVaultConfig,
    log_source: Arc<dyn LogSource>,
    object_store: Arc<dyn ObjectStore>,
    clock: Arc<dyn Clock>,
}

impl ExportJob {
    /// Create a new export job
    pub fn new(
        config: LogVaultConfig,
        log_source: Arc<dyn LogSource>,
        object_store: Arc<dyn ObjectStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            log_source,
            object_store,
            clock,
        }
    }

    /// Create a job from a pre-built client pair
    pub fn from_clients(
        config: LogVaultConfig,
        clients: ExportClients,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::new(config, clients.log_source, clients.object_store, clock)
    }

    /// Run one export
    ///
    /// The trigger payload is ignored. On success the response is always
    /// `200` with the fixed success body, whether or not events were found.
    ///
    /// # Errors
    ///
    /// Returns the first failure from the log read, serialization,
    /// compression or upload. Nothing is written when any step before the
    /// upload fails.
    pub async fn run(
        &self,
        trigger: &Trigger,
        context: &InvocationContext,
    ) -> Result<InvocationResponse> {
        let span = tracing::info_span!(
            "export",
            request_id = %context.request_id,
            function_name = context.function_name.as_deref().unwrap_or("local"),
        );

        async move {
            tracing::debug!(trigger = %trigger.payload(), "Invocation received");
            let report = self.execute().await?;
            report.log_summary();
            Ok(InvocationResponse::success())
        }
        .instrument(span)
        .await
    }

    async fn execute(&self) -> Result<ExportReport> {
        let started = Instant::now();
        let source = &self.config.source;
        let destination = &self.config.destination;

        let now = self.clock.now();
        let window = ExportWindow::ending_at(now, source.lookback_seconds);
        let key = ObjectKey::for_export(&destination.key_prefix, now)
            .map_err(LogVaultError::Configuration)?;

        log_export_start!(
            source.log_group,
            source.log_stream,
            window.start_ms,
            window.end_ms
        );

        let request = FetchRequest {
            log_group: source.log_group.clone(),
            log_stream: source.log_stream.clone(),
            window,
            limit: source.max_records,
            start_from_head: source.start_from_head,
        };

        let records = self.log_source.fetch_events(&request).await.map_err(|e| {
            tracing::error!(
                log_group = %source.log_group,
                log_stream = %source.log_stream,
                error = %e,
                "Failed to read log events"
            );
            e
        })?;

        tracing::debug!(records = records.len(), "Fetched log events");

        let artifact = ExportArtifact::build(key, &records, destination.compression_level)?;

        let dry_run = self.config.export.dry_run;
        let mut report = ExportReport {
            key: artifact.key().clone(),
            window,
            record_count: artifact.record_count(),
            payload_bytes: artifact.payload_bytes(),
            compressed_bytes: artifact.compressed_bytes(),
            dry_run,
            duration: started.elapsed(),
        };

        if !dry_run {
            let (key, body) = artifact.into_parts();
            self.object_store
                .put_object(PutRequest {
                    bucket: destination.bucket.clone(),
                    key,
                    body,
                    content_type: destination.content_type.clone(),
                })
                .await
                .map_err(|e| {
                    tracing::error!(
                        bucket = %destination.bucket,
                        key = %report.key,
                        error = %e,
                        "Failed to upload export"
                    );
                    e
                })?;
        }

        report.duration = started.elapsed();
        Ok(report)
    }
}
