//! Configuration schema types
//!
//! This module defines the configuration structure for logvault.

use crate::config::SecretString;
use crate::domain::key::{validate_prefix, DEFAULT_KEY_PREFIX};
use crate::domain::window::{DEFAULT_LOOKBACK_SECONDS, MAX_LOOKBACK_SECONDS};
use serde::{Deserialize, Serialize};

/// Upper bound for a single `GetLogEvents` page
pub const MAX_RECORDS_LIMIT: usize = 10_000;

/// Main logvault configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogVaultConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Log source (CloudWatch Logs) settings
    pub source: SourceConfig,

    /// Destination (S3) settings
    pub destination: DestinationConfig,

    /// AWS client settings
    #[serde(default)]
    pub aws: AwsConfig,

    /// Export behaviour
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LogVaultConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.source.validate()?;
        self.destination.validate()?;
        self.aws.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// CloudWatch Logs source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Log group name
    pub log_group: String,

    /// Log stream name within the group
    pub log_stream: String,

    /// Maximum number of events fetched per invocation
    #[serde(default = "default_max_records")]
    pub max_records: usize,

    /// Window length in seconds
    #[serde(default = "default_lookback_seconds")]
    pub lookback_seconds: i64,

    /// Return the oldest events first when the window holds more than `max_records`
    #[serde(default)]
    pub start_from_head: bool,
}

impl SourceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.log_group.trim().is_empty() {
            return Err("source.log_group cannot be empty".to_string());
        }
        if self.log_stream.trim().is_empty() {
            return Err("source.log_stream cannot be empty".to_string());
        }
        if self.max_records == 0 || self.max_records > MAX_RECORDS_LIMIT {
            return Err(format!(
                "source.max_records must be between 1 and {MAX_RECORDS_LIMIT}, got {}",
                self.max_records
            ));
        }
        if self.lookback_seconds <= 0 || self.lookback_seconds > MAX_LOOKBACK_SECONDS {
            return Err(format!(
                "source.lookback_seconds must be between 1 and {MAX_LOOKBACK_SECONDS}, got {}",
                self.lookback_seconds
            ));
        }
        Ok(())
    }
}

/// S3 destination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    /// Bucket name
    pub bucket: String,

    /// Prefix prepended to every object key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Content type set on uploaded objects
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Gzip compression level (0-9)
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,
}

impl DestinationConfig {
    fn validate(&self) -> Result<(), String> {
        let len = self.bucket.len();
        if self.bucket.trim().is_empty() {
            return Err("destination.bucket cannot be empty".to_string());
        }
        if !(3..=63).contains(&len) {
            return Err(format!(
                "destination.bucket must be 3-63 characters long, got {len}"
            ));
        }
        validate_prefix(&self.key_prefix).map_err(|e| format!("destination.key_prefix: {e}"))?;
        if self.content_type.trim().is_empty() {
            return Err("destination.content_type cannot be empty".to_string());
        }
        if self.compression_level > 9 {
            return Err(format!(
                "destination.compression_level must be between 0 and 9, got {}",
                self.compression_level
            ));
        }
        Ok(())
    }
}

/// AWS client configuration
///
/// Everything is optional; the SDK's default provider chain fills the gaps.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AwsConfig {
    /// Region override
    #[serde(default)]
    pub region: Option<String>,

    /// Endpoint override for both services (e.g. LocalStack)
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Use path-style S3 addressing
    #[serde(default)]
    pub force_path_style: bool,

    /// Static access key id
    #[serde(default)]
    pub access_key_id: Option<String>,

    /// Static secret access key
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub secret_access_key: Option<SecretString>,

    /// Session token for temporary credentials
    #[serde(default)]
    pub session_token: Option<SecretString>,
}

impl AwsConfig {
    fn validate(&self) -> Result<(), String> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(_), None) => {
                return Err(
                    "aws.secret_access_key is required when aws.access_key_id is set".to_string(),
                )
            }
            (None, Some(_)) => {
                return Err(
                    "aws.access_key_id is required when aws.secret_access_key is set".to_string(),
                )
            }
            _ => {}
        }
        if self.session_token.is_some() && self.access_key_id.is_none() {
            return Err("aws.session_token requires static credentials".to_string());
        }
        if let Some(region) = &self.region {
            if region.trim().is_empty() {
                return Err("aws.region cannot be empty when set".to_string());
            }
        }
        if let Some(endpoint) = &self.endpoint_url {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!(
                    "aws.endpoint_url must start with http:// or https://, got {endpoint}"
                ));
            }
        }
        Ok(())
    }

    /// Returns true if static credentials are configured
    pub fn has_static_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }
}

/// Export behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Build the artifact but skip the upload
    #[serde(default)]
    pub dry_run: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Console output format (text or json)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.format.as_str()) {
            return Err(format!(
                "Invalid logging format '{}'. Must be one of: {}",
                self.format,
                valid_formats.join(", ")
            ));
        }

        if self.local_enabled {
            if self.local_path.trim().is_empty() {
                return Err("Local logging enabled but local_path is empty".to_string());
            }
            let valid_rotations = ["daily", "hourly", "never"];
            if !valid_rotations.contains(&self.local_rotation.as_str()) {
                return Err(format!(
                    "Invalid local_rotation '{}'. Must be one of: {}",
                    self.local_rotation,
                    valid_rotations.join(", ")
                ));
            }
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_max_records() -> usize {
    MAX_RECORDS_LIMIT
}

pub(crate) fn default_lookback_seconds() -> i64 {
    DEFAULT_LOOKBACK_SECONDS
}

pub(crate) fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

pub(crate) fn default_content_type() -> String {
    "application/gzip".to_string()
}

pub(crate) fn default_compression_level() -> u32 {
    9
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_local_path() -> String {
    "/tmp/logvault".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
