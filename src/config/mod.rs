//! Configuration management for logvault.
//!
//! # Overview
//!
//! logvault reads a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `LOGVAULT_<SECTION>_<KEY>` environment overrides
//! - Default values for everything except the log source and bucket
//! - Validation on load
//!
//! When no file is present (the usual Lambda deployment), the whole
//! configuration can come from the environment via [`load_config_or_env`].
//!
//! # Example Configuration
//!
//! ```toml
//! [source]
//! log_group = "devops-veera"
//! log_stream = "devops"
//!
//! [destination]
//! bucket = "my-archive-bucket"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use logvault::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("logvault.toml")?;
//! println!("Exporting {}/{}", config.source.log_group, config.source.log_stream);
//! println!("Into s3://{}/{}", config.destination.bucket, config.destination.key_prefix);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_from_env, load_config_or_env};
pub use schema::{
    ApplicationConfig, AwsConfig, DestinationConfig, ExportConfig, LogVaultConfig, LoggingConfig,
    SourceConfig, MAX_RECORDS_LIMIT,
};
pub use secret::{secret_string, SecretString, SecretValue};
