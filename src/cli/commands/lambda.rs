//! Lambda command implementation
//!
//! This module implements the `lambda` command, which hands control to the
//! AWS Lambda runtime. Each event is one export invocation; clients and
//! configuration are built once and reused across warm invocations.

use crate::adapters::factory::build_clients;
use crate::config::load_config_or_env;
use crate::core::clock::SystemClock;
use crate::core::export::ExportJob;
use crate::domain::{InvocationContext, InvocationResponse, Trigger};
use clap::Args;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;

const FUNCTION_NAME_ENV: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Arguments for the lambda command
#[derive(Args, Debug)]
pub struct LambdaArgs {}

impl LambdaArgs {
    /// Execute the lambda command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_env(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let clients = match build_clients(&config).await {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create AWS clients");
                eprintln!("Failed to initialize export: {e}");
                return Ok(4);
            }
        };

        let job = Arc::new(ExportJob::from_clients(
            config,
            clients,
            Arc::new(SystemClock),
        ));
        let function_name = std::env::var(FUNCTION_NAME_ENV).ok();

        tracing::info!(
            function_name = function_name.as_deref().unwrap_or("unknown"),
            "Starting Lambda runtime"
        );

        let result = lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
            let job = Arc::clone(&job);
            let function_name = function_name.clone();
            async move { handle_event(&job, event, function_name).await }
        }))
        .await;

        match result {
            Ok(()) => Ok(0),
            Err(e) => {
                tracing::error!(error = %e, "Lambda runtime failed");
                eprintln!("Lambda runtime failed: {e}");
                Ok(5)
            }
        }
    }
}

/// Run one export for a Lambda event
///
/// Errors are returned to the runtime, which reports them as a function error.
pub async fn handle_event(
    job: &ExportJob,
    event: LambdaEvent<Value>,
    function_name: Option<String>,
) -> Result<InvocationResponse, Error> {
    let (payload, lambda_context) = event.into_parts();

    let mut context = InvocationContext::new(lambda_context.request_id);
    if let Some(name) = function_name {
        context = context.with_function_name(name);
    }

    let response = job.run(&Trigger::new(payload), &context).await?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logs::{FetchRequest, LogSource};
    use crate::adapters::storage::{ObjectStore, PutRequest};
    use crate::config::{DestinationConfig, LogVaultConfig, SourceConfig};
    use crate::core::clock::FixedClock;
    use crate::domain::{LogRecord, LogSourceError, Result};
    use async_trait::async_trait;
    use lambda_runtime::Context;
    use serde_json::json;
    use std::sync::Mutex;

    struct StubSource(Option<LogSourceError>);

    #[async_trait]
    impl LogSource for StubSource {
        async fn fetch_events(&self, _request: &FetchRequest) -> Result<Vec<LogRecord>> {
            match &self.0 {
                Some(err) => Err(err.clone().into()),
                None => Ok(vec![LogRecord::new(
                    1_699_999_000_000,
                    "GET /health 200",
                    1_699_999_000_040,
                )]),
            }
        }

        async fn check_access(&self, _log_group: &str, _log_stream: &str) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingStore(Mutex<Vec<PutRequest>>);

    #[async_trait]
    impl ObjectStore for RecordingStore {
        async fn put_object(&self, request: PutRequest) -> Result<()> {
            self.0.lock().unwrap().push(request);
            Ok(())
        }

        async fn check_access(&self, _bucket: &str) -> Result<()> {
            Ok(())
        }
    }

    fn job(source: StubSource, store: Arc<RecordingStore>) -> ExportJob {
        let config = LogVaultConfig {
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
        };
        ExportJob::new(
            config,
            Arc::new(source),
            store,
            Arc::new(FixedClock::at_epoch(1_700_000_000, 0).unwrap()),
        )
    }

    fn scheduled_event(request_id: &str) -> LambdaEvent<Value> {
        let mut context = Context::default();
        context.request_id = request_id.to_string();
        LambdaEvent::new(
            json!({
                "source": "aws.events",
                "detail-type": "Scheduled Event",
                "detail": {}
            }),
            context,
        )
    }

    #[tokio::test]
    async fn test_handle_event_exports_once() {
        let store = Arc::new(RecordingStore::default());
        let job = job(StubSource(None), store.clone());

        let response = handle_event(
            &job,
            scheduled_event("c6af9ac6-7b61-11e6-9a41-93e8deadbeef"),
            Some("export-logs".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(response, InvocationResponse::success());
        let puts = store.0.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert_eq!(
            puts[0].key.as_str(),
            "cloudwatch-logs/logs-1700000000.json.gz"
        );
        assert_eq!(puts[0].content_type, "application/gzip");
    }

    #[tokio::test]
    async fn test_handle_event_source_failure_is_returned() {
        let store = Arc::new(RecordingStore::default());
        let job = job(
            StubSource(Some(LogSourceError::NotFound("devops-veera/devops".to_string()))),
            store.clone(),
        );

        let err = handle_event(&job, scheduled_event("req-failed"), None)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not found"));
        assert!(store.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_execute_invalid_config_returns_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logvault.toml");
        std::fs::write(&path, "[source\nlog_group = ").unwrap();

        let code = LambdaArgs {}
            .execute(path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
