//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{
    default_compression_level, default_content_type, default_key_prefix,
    default_lookback_seconds, default_max_records, AwsConfig, DestinationConfig, LogVaultConfig,
    SourceConfig,
};
use super::secret_string;
use crate::domain::errors::LogVaultError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LogVaultConfig
/// 4. Applies environment variable overrides (LOGVAULT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use logvault::config::loader::load_config;
///
/// let config = load_config("logvault.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LogVaultConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LogVaultError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LogVaultError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: LogVaultConfig = toml::from_str(&contents)
        .map_err(|e| LogVaultError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        LogVaultError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Builds configuration from `LOGVAULT_*` environment variables alone
///
/// Used when the job is deployed without a config file. The same override
/// names as [`load_config`] apply; `LOGVAULT_SOURCE_LOG_GROUP`,
/// `LOGVAULT_SOURCE_LOG_STREAM` and `LOGVAULT_DESTINATION_BUCKET` are required.
pub fn load_config_from_env() -> Result<LogVaultConfig> {
    let mut config = LogVaultConfig {
        application: Default::default(),
        source: SourceConfig {
            log_group: String::new(),
            log_stream: String::new(),
            max_records: default_max_records(),
            lookback_seconds: default_lookback_seconds(),
            start_from_head: false,
        },
        destination: DestinationConfig {
            bucket: String::new(),
            key_prefix: default_key_prefix(),
            content_type: default_content_type(),
            compression_level: default_compression_level(),
        },
        aws: AwsConfig::default(),
        export: Default::default(),
        logging: Default::default(),
    };

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        LogVaultError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads `path` if it exists, otherwise falls back to [`load_config_from_env`]
pub fn load_config_or_env(path: impl AsRef<Path>) -> Result<LogVaultConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::info!(
            path = %path.display(),
            "Configuration file not found, using environment variables"
        );
        load_config_from_env()
    }
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| LogVaultError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LogVaultError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using LOGVAULT_* prefix
///
/// Environment variables follow the pattern: LOGVAULT_<SECTION>_<KEY>
/// For example: LOGVAULT_SOURCE_LOG_GROUP, LOGVAULT_DESTINATION_BUCKET
fn apply_env_overrides(config: &mut LogVaultConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("LOGVAULT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Source overrides
    if let Ok(val) = std::env::var("LOGVAULT_SOURCE_LOG_GROUP") {
        config.source.log_group = val;
    }
    if let Ok(val) = std::env::var("LOGVAULT_SOURCE_LOG_STREAM") {
        config.source.log_stream = val;
    }
    if let Ok(val) = std::env::var("LOGVAULT_SOURCE_MAX_RECORDS") {
        if let Ok(max) = val.parse() {
            config.source.max_records = max;
        }
    }
    if let Ok(val) = std::env::var("LOGVAULT_SOURCE_LOOKBACK_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.source.lookback_seconds = secs;
        }
    }
    if let Ok(val) = std::env::var("LOGVAULT_SOURCE_START_FROM_HEAD") {
        config.source.start_from_head = val.parse().unwrap_or(false);
    }

    // Destination overrides
    if let Ok(val) = std::env::var("LOGVAULT_DESTINATION_BUCKET") {
        config.destination.bucket = val;
    }
    if let Ok(val) = std::env::var("LOGVAULT_DESTINATION_KEY_PREFIX") {
        config.destination.key_prefix = val;
    }
    if let Ok(val) = std::env::var("LOGVAULT_DESTINATION_CONTENT_TYPE") {
        config.destination.content_type = val;
    }
    if let Ok(val) = std::env::var("LOGVAULT_DESTINATION_COMPRESSION_LEVEL") {
        if let Ok(level) = val.parse() {
            config.destination.compression_level = level;
        }
    }

    // AWS overrides
    if let Ok(val) = std::env::var("LOGVAULT_AWS_REGION") {
        config.aws.region = Some(val);
    }
    if let Ok(val) = std::env::var("LOGVAULT_AWS_ENDPOINT_URL") {
        config.aws.endpoint_url = Some(val);
    }
    if let Ok(val) = std::env::var("LOGVAULT_AWS_FORCE_PATH_STYLE") {
        config.aws.force_path_style = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("LOGVAULT_AWS_ACCESS_KEY_ID") {
        config.aws.access_key_id = Some(val);
    }
    if let Ok(val) = std::env::var("LOGVAULT_AWS_SECRET_ACCESS_KEY") {
        config.aws.secret_access_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("LOGVAULT_AWS_SESSION_TOKEN") {
        config.aws.session_token = Some(secret_string(val));
    }

    // Export overrides
    if let Ok(val) = std::env::var("LOGVAULT_EXPORT_DRY_RUN") {
        config.export.dry_run = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("LOGVAULT_LOGGING_FORMAT") {
        config.logging.format = val;
    }
    if let Ok(val) = std::env::var("LOGVAULT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("LOGVAULT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("LOGVAULT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
