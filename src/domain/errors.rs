//! Domain error types
//!
//! This module defines the error hierarchy for logvault.
//! All errors are domain-specific and don't expose AWS SDK types.

use thiserror::Error;

/// Main logvault error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum LogVaultError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Log source (CloudWatch Logs) errors
    #[error("Log source error: {0}")]
    LogSource(#[from] LogSourceError),

    /// Object store (S3) errors
    #[error("Object store error: {0}")]
    ObjectStore(#[from] ObjectStoreError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Compression errors
    #[error("Compression error: {0}")]
    Compression(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Log source errors
///
/// Errors that occur while reading events from the log-aggregation service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogSourceError {
    /// Log group or log stream does not exist
    #[error("Log group or stream not found: {0}")]
    NotFound(String),

    /// Credentials rejected or missing permission
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Request rate exceeded
    #[error("Request throttled: {0}")]
    Throttled(String),

    /// Request rejected as malformed
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Service unavailable or unreachable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Any other read failure
    #[error("Failed to read log events: {0}")]
    ReadFailed(String),
}

/// Object store errors
///
/// Errors that occur while writing the export artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectStoreError {
    /// Destination bucket does not exist
    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    /// Credentials rejected or missing permission
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Request rate exceeded
    #[error("Request throttled: {0}")]
    Throttled(String),

    /// Any other write failure
    #[error("Failed to write object: {0}")]
    WriteFailed(String),
}

impl From<std::io::Error> for LogVaultError {
    fn from(err: std::io::Error) -> Self {
        LogVaultError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LogVaultError {
    fn from(err: serde_json::Error) -> Self {
        LogVaultError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for LogVaultError {
    fn from(err: toml::de::Error) -> Self {
        LogVaultError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LogVaultError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_log_source_error_conversion() {
        let source_err = LogSourceError::NotFound("devops".to_string());
        let err: LogVaultError = source_err.into();
        assert!(matches!(err, LogVaultError::LogSource(_)));
        assert_eq!(
            err.to_string(),
            "Log source error: Log group or stream not found: devops"
        );
    }

    #[test]
    fn test_object_store_error_conversion() {
        let store_err = ObjectStoreError::BucketNotFound("archive".to_string());
        let err: LogVaultError = store_err.into();
        assert!(matches!(err, LogVaultError::ObjectStore(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: LogVaultError = io_err.into();
        assert!(matches!(err, LogVaultError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: LogVaultError = json_err.into();
        assert!(matches!(err, LogVaultError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: LogVaultError = toml_err.into();
        assert!(matches!(err, LogVaultError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &LogVaultError::Other("x".to_string());
        let _: &dyn std::error::Error = &LogSourceError::Throttled("x".to_string());
        let _: &dyn std::error::Error = &ObjectStoreError::WriteFailed("x".to_string());
    }
}
