//! CloudWatch Logs implementation of [`LogSource`]

use super::traits::{FetchRequest, LogSource};
use crate::domain::{LogRecord, LogSourceError, LogVaultError, Result};
use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cloudwatchlogs::types::OutputLogEvent;
use aws_sdk_cloudwatchlogs::Client;

/// CloudWatch Logs reader
///
/// Wraps a client built once per process; cloning is cheap.
#[derive(Debug, Clone)]
pub struct CloudWatchLogSource {
    client: Client,
}

impl CloudWatchLogSource {
    /// Create a new source from an SDK client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogSource for CloudWatchLogSource {
    async fn fetch_events(&self, request: &FetchRequest) -> Result<Vec<LogRecord>> {
        let limit = i32::try_from(request.limit).map_err(|_| {
            LogVaultError::LogSource(LogSourceError::InvalidParameter(format!(
                "limit {} out of range",
                request.limit
            )))
        })?;

        tracing::debug!(
            log_group = %request.log_group,
            log_stream = %request.log_stream,
            start_ms = request.window.start_ms,
            end_ms = request.window.end_ms,
            limit,
            "Calling GetLogEvents"
        );

        let output = self
            .client
            .get_log_events()
            .log_group_name(&request.log_group)
            .log_stream_name(&request.log_stream)
            .start_time(request.window.start_ms)
            .end_time(request.window.end_ms)
            .limit(limit)
            .start_from_head(request.start_from_head)
            .send()
            .await
            .map_err(|e| LogVaultError::LogSource(classify_sdk_error(&e)))?;

        Ok(output.events().iter().map(record_from_event).collect())
    }

    async fn check_access(&self, log_group: &str, log_stream: &str) -> Result<()> {
        let output = self
            .client
            .describe_log_streams()
            .log_group_name(log_group)
            .log_stream_name_prefix(log_stream)
            .limit(1)
            .send()
            .await
            .map_err(|e| LogVaultError::LogSource(classify_sdk_error(&e)))?;

        let found = output
            .log_streams()
            .iter()
            .any(|s| s.log_stream_name() == Some(log_stream));
        if !found {
            return Err(LogSourceError::NotFound(format!("{log_group}/{log_stream}")).into());
        }

        Ok(())
    }
}

/// Convert an SDK event into a record
pub fn record_from_event(event: &OutputLogEvent) -> LogRecord {
    LogRecord {
        timestamp: event.timestamp(),
        message: event.message().map(str::to_string),
        ingestion_time: event.ingestion_time(),
    }
}

fn classify_sdk_error<E, R>(err: &SdkError<E, R>) -> LogSourceError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(err).to_string();
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            LogSourceError::ServiceUnavailable(message)
        }
        _ => classify_error_code(err.as_service_error().and_then(|e| e.code()), message),
    }
}

/// Map a CloudWatch Logs error code onto [`LogSourceError`]
pub fn classify_error_code(code: Option<&str>, message: String) -> LogSourceError {
    match code {
        Some("ResourceNotFoundException") => LogSourceError::NotFound(message),
        Some(
            "AccessDeniedException"
            | "UnrecognizedClientException"
            | "ExpiredTokenException"
            | "InvalidSignatureException",
        ) => LogSourceError::AccessDenied(message),
        Some("ThrottlingException" | "LimitExceededException") => {
            LogSourceError::Throttled(message)
        }
        Some("InvalidParameterException") => LogSourceError::InvalidParameter(message),
        Some("ServiceUnavailableException") => LogSourceError::ServiceUnavailable(message),
        _ => LogSourceError::ReadFailed(message),
    }
}
