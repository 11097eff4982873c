//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX so they never
//! observe each other's overrides.

use logvault::config::{load_config, load_config_from_env, load_config_or_env};
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const OVERRIDE_VARS: &[&str] = &[
    "LOGVAULT_APPLICATION_LOG_LEVEL",
    "LOGVAULT_SOURCE_LOG_GROUP",
    "LOGVAULT_SOURCE_LOG_STREAM",
    "LOGVAULT_SOURCE_MAX_RECORDS",
    "LOGVAULT_SOURCE_LOOKBACK_SECONDS",
    "LOGVAULT_SOURCE_START_FROM_HEAD",
    "LOGVAULT_DESTINATION_BUCKET",
    "LOGVAULT_DESTINATION_KEY_PREFIX",
    "LOGVAULT_DESTINATION_CONTENT_TYPE",
    "LOGVAULT_DESTINATION_COMPRESSION_LEVEL",
    "LOGVAULT_AWS_REGION",
    "LOGVAULT_AWS_ENDPOINT_URL",
    "LOGVAULT_AWS_FORCE_PATH_STYLE",
    "LOGVAULT_AWS_ACCESS_KEY_ID",
    "LOGVAULT_AWS_SECRET_ACCESS_KEY",
    "LOGVAULT_AWS_SESSION_TOKEN",
    "LOGVAULT_EXPORT_DRY_RUN",
    "LOGVAULT_LOGGING_FORMAT",
    "LOGVAULT_LOGGING_LOCAL_ENABLED",
    "LOGVAULT_LOGGING_LOCAL_PATH",
    "LOGVAULT_LOGGING_LOCAL_ROTATION",
    "TEST_AWS_SECRET",
];

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in OVERRIDE_VARS {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const MINIMAL: &str = r#"
[source]
log_group = "devops-veera"
log_stream = "devops"

[destination]
bucket = "devops-veera-logs"
"#;

#[test]
fn test_load_minimal_config_applies_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(MINIMAL);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.source.max_records, 10_000);
    assert_eq!(config.source.lookback_seconds, 86_400);
    assert!(!config.source.start_from_head);
    assert_eq!(config.destination.key_prefix, "cloudwatch-logs");
    assert_eq!(config.destination.content_type, "application/gzip");
    assert_eq!(config.destination.compression_level, 9);
    assert!(config.aws.region.is_none());
    assert!(!config.export.dry_run);
    assert_eq!(config.logging.format, "text");
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "debug"

[source]
log_group = "payments"
log_stream = "api-1"
max_records = 500
lookback_seconds = 3600
start_from_head = true

[destination]
bucket = "payments-archive"
key_prefix = "exports/payments"
content_type = "application/x-gzip"
compression_level = 6

[aws]
region = "eu-west-1"
endpoint_url = "http://localhost:4566"
force_path_style = true
access_key_id = "test"
secret_access_key = "test-secret"

[export]
dry_run = true

[logging]
format = "json"
local_enabled = true
local_path = "/tmp/logvault-test"
local_rotation = "hourly"
"#;
    let file = write_config(toml_content);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.source.log_group, "payments");
    assert_eq!(config.source.max_records, 500);
    assert_eq!(config.source.lookback_seconds, 3600);
    assert!(config.source.start_from_head);
    assert_eq!(config.destination.key_prefix, "exports/payments");
    assert_eq!(config.destination.compression_level, 6);
    assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
    assert!(config.aws.force_path_style);
    assert!(config.aws.has_static_credentials());
    assert!(config.export.dry_run);
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_substitution_for_secrets() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_AWS_SECRET", "substituted-secret");

    let file = write_config(
        r#"
[source]
log_group = "devops-veera"
log_stream = "devops"

[destination]
bucket = "devops-veera-logs"

[aws]
access_key_id = "AKIDEXAMPLE"
secret_access_key = "${TEST_AWS_SECRET}"
"#,
    );
    let config = load_config(file.path()).unwrap();

    let secret = config.aws.secret_access_key.as_ref().unwrap();
    assert_eq!(secret.expose_secret().as_ref(), "substituted-secret");

    cleanup_env_vars();
}

#[test]
fn test_env_substitution_missing_variable() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[source]
log_group = "devops-veera"
log_stream = "devops"

[destination]
bucket = "devops-veera-logs"

[aws]
access_key_id = "AKIDEXAMPLE"
secret_access_key = "${TEST_AWS_SECRET}"
"#,
    );
    let err = load_config(file.path()).unwrap_err();

    assert!(err.to_string().contains("TEST_AWS_SECRET"));
}

#[test]
fn test_env_overrides_take_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("LOGVAULT_SOURCE_LOG_GROUP", "override-group");
    std::env::set_var("LOGVAULT_SOURCE_MAX_RECORDS", "250");
    std::env::set_var("LOGVAULT_DESTINATION_BUCKET", "override-bucket");
    std::env::set_var("LOGVAULT_EXPORT_DRY_RUN", "true");
    std::env::set_var("LOGVAULT_LOGGING_FORMAT", "json");

    let file = write_config(MINIMAL);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.source.log_group, "override-group");
    assert_eq!(config.source.log_stream, "devops");
    assert_eq!(config.source.max_records, 250);
    assert_eq!(config.destination.bucket, "override-bucket");
    assert!(config.export.dry_run);
    assert_eq!(config.logging.format, "json");

    cleanup_env_vars();
}

#[test]
fn test_env_override_invalid_value_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("LOGVAULT_DESTINATION_KEY_PREFIX", "/leading-slash");

    let file = write_config(MINIMAL);
    let err = load_config(file.path()).unwrap_err();

    assert!(err.to_string().contains("validation failed"));

    cleanup_env_vars();
}

#[test]
fn test_load_config_from_env() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("LOGVAULT_SOURCE_LOG_GROUP", "devops-veera");
    std::env::set_var("LOGVAULT_SOURCE_LOG_STREAM", "devops");
    std::env::set_var("LOGVAULT_DESTINATION_BUCKET", "devops-veera-logs");
    std::env::set_var("LOGVAULT_AWS_REGION", "us-east-1");

    let config = load_config_from_env().unwrap();

    assert_eq!(config.source.log_group, "devops-veera");
    assert_eq!(config.source.log_stream, "devops");
    assert_eq!(config.destination.bucket, "devops-veera-logs");
    assert_eq!(config.destination.key_prefix, "cloudwatch-logs");
    assert_eq!(config.aws.region.as_deref(), Some("us-east-1"));

    cleanup_env_vars();
}

#[test]
fn test_load_config_from_env_requires_names() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    assert!(load_config_from_env().is_err());
}

#[test]
fn test_load_config_or_env_prefers_file() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(MINIMAL);
    let config = load_config_or_env(file.path()).unwrap();
    assert_eq!(config.source.log_group, "devops-veera");

    std::env::set_var("LOGVAULT_SOURCE_LOG_GROUP", "env-group");
    std::env::set_var("LOGVAULT_SOURCE_LOG_STREAM", "env-stream");
    std::env::set_var("LOGVAULT_DESTINATION_BUCKET", "env-bucket");
    let config = load_config_or_env("/nonexistent/logvault.toml").unwrap();
    assert_eq!(config.source.log_group, "env-group");
    assert_eq!(config.destination.bucket, "env-bucket");

    cleanup_env_vars();
}

#[test]
fn test_invalid_max_records_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[source]
log_group = "devops-veera"
log_stream = "devops"
max_records = 0

[destination]
bucket = "devops-veera-logs"
"#,
    );

    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_missing_destination_section_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[source]
log_group = "devops-veera"
log_stream = "devops"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn test_oversized_lookback_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[source]
log_group = "devops-veera"
log_stream = "devops"
lookback_seconds = 9223372036854775807

[destination]
bucket = "devops-veera-logs"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("lookback_seconds"));
}
