//! Export command implementation
//!
//! This module implements the `export` command, a single manual run of the
//! export job from the command line.

use crate::adapters::factory::build_clients;
use crate::config::{load_config, LogVaultConfig};
use crate::core::clock::SystemClock;
use crate::core::export::ExportJob;
use crate::domain::{InvocationContext, Trigger};
use clap::Args;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Dry run mode - build the artifact without uploading it
    #[arg(long)]
    pub dry_run: bool,

    /// Override the source log group
    #[arg(long)]
    pub log_group: Option<String>,

    /// Override the source log stream
    #[arg(long)]
    pub log_stream: Option<String>,

    /// Override the destination bucket
    #[arg(long)]
    pub bucket: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        if config.export.dry_run {
            tracing::info!("Dry run mode enabled - nothing will be uploaded");
            println!("🔍 DRY RUN MODE - No object will be written to S3");
            println!();
        }

        let clients = match build_clients(&config).await {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create AWS clients");
                eprintln!("Failed to initialize export: {e}");
                return Ok(4);
            }
        };

        let job = ExportJob::from_clients(config, clients, Arc::new(SystemClock));
        let context = InvocationContext::generated();

        let response = match job.run(&Trigger::manual(), &context).await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(request_id = %context.request_id, error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5);
            }
        };

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(0)
    }

    /// Apply command line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut LogVaultConfig) {
        if let Some(group) = &self.log_group {
            tracing::info!(log_group = %group, "Overriding log group from CLI");
            config.source.log_group = group.clone();
        }

        if let Some(stream) = &self.log_stream {
            tracing::info!(log_stream = %stream, "Overriding log stream from CLI");
            config.source.log_stream = stream.clone();
        }

        if let Some(bucket) = &self.bucket {
            tracing::info!(bucket = %bucket, "Overriding bucket from CLI");
            config.destination.bucket = bucket.clone();
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.export.dry_run = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DestinationConfig, SourceConfig};

    fn config() -> LogVaultConfig {
        LogVaultConfig {
            application: Default::default(),
            source: SourceConfig {
                log_group: "devops-veera".to_string(),
                log_stream: "devops".to_string(),
                max_records: 10_000,
                lookback_seconds: 86_400,
                start_from_head: false,
            },
            destination: DestinationConfig {
                bucket: "devops-veera-logs".to_string(),
                key_prefix: "cloudwatch-logs".to_string(),
                content_type: "application/gzip".to_string(),
                compression_level: 9,
            },
            aws: Default::default(),
            export: Default::default(),
            logging: Default::default(),
        }
    }

    #[test]
    fn test_apply_overrides_none() {
        let mut cfg = config();
        ExportArgs::default().apply_overrides(&mut cfg);

        assert_eq!(cfg.source.log_group, "devops-veera");
        assert_eq!(cfg.destination.bucket, "devops-veera-logs");
        assert!(!cfg.export.dry_run);
    }

    #[test]
    fn test_apply_overrides_all() {
        let mut cfg = config();
        let args = ExportArgs {
            dry_run: true,
            log_group: Some("payments".to_string()),
            log_stream: Some("api-2".to_string()),
            bucket: Some("payments-archive".to_string()),
        };
        args.apply_overrides(&mut cfg);

        assert_eq!(cfg.source.log_group, "payments");
        assert_eq!(cfg.source.log_stream, "api-2");
        assert_eq!(cfg.destination.bucket, "payments-archive");
        assert!(cfg.export.dry_run);
    }

    #[tokio::test]
    async fn test_execute_missing_config_returns_config_error() {
        let args = ExportArgs::default();
        let code = args
            .execute("/nonexistent/logvault.toml")
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
