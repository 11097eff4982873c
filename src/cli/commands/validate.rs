//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the logvault configuration file.

use crate::adapters::factory::build_clients;
use crate::config::{load_config, LogVaultConfig};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Also verify the log stream and bucket are reachable
    #[arg(long)]
    pub check_access: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!();
        print_summary(&config);
        println!();

        if self.check_access {
            return Ok(check_access(&config).await);
        }

        Ok(0)
    }
}

fn print_summary(config: &LogVaultConfig) {
    println!("Configuration Summary:");
    println!("  Log Level: {}", config.application.log_level);
    println!("  Log Group: {}", config.source.log_group);
    println!("  Log Stream: {}", config.source.log_stream);
    println!("  Max Records: {}", config.source.max_records);
    println!("  Lookback: {}s", config.source.lookback_seconds);
    println!("  Bucket: {}", config.destination.bucket);
    println!("  Key Prefix: {}", config.destination.key_prefix);
    println!("  Content Type: {}", config.destination.content_type);
    println!(
        "  Region: {}",
        config.aws.region.as_deref().unwrap_or("(from environment)")
    );
    if let Some(endpoint) = &config.aws.endpoint_url {
        println!("  Endpoint: {endpoint}");
    }
    println!(
        "  Credentials: {}",
        if config.aws.has_static_credentials() {
            "static (***)"
        } else {
            "default provider chain"
        }
    );
    println!("  Dry Run: {}", config.export.dry_run);
    println!("  Log Format: {}", config.logging.format);
}

async fn check_access(config: &LogVaultConfig) -> i32 {
    let clients = match build_clients(config).await {
        Ok(c) => c,
        Err(e) => {
            println!("❌ Failed to create AWS clients");
            println!("   Error: {e}");
            return 4;
        }
    };

    let mut exit_code = 0;

    match clients
        .log_source
        .check_access(&config.source.log_group, &config.source.log_stream)
        .await
    {
        Ok(()) => println!("✅ Log stream is readable"),
        Err(e) => {
            tracing::warn!(error = %e, "Log stream access check failed");
            println!("❌ Log stream access check failed");
            println!("   Error: {e}");
            exit_code = 4;
        }
    }

    match clients
        .object_store
        .check_access(&config.destination.bucket)
        .await
    {
        Ok(()) => println!("✅ Bucket is reachable"),
        Err(e) => {
            tracing::warn!(error = %e, "Bucket access check failed");
            println!("❌ Bucket access check failed");
            println!("   Error: {e}");
            exit_code = 4;
        }
    }

    exit_code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_execute_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logvault.toml");
        std::fs::write(
            &path,
            r#"
[source]
log_group = "devops-veera"
log_stream = "devops"

[destination]
bucket = "devops-veera-logs"
"#,
        )
        .unwrap();

        let code = ValidateArgs::default()
            .execute(path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_execute_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logvault.toml");
        std::fs::write(
            &path,
            r#"
[source]
log_group = "devops-veera"
log_stream = "devops"
max_records = 20000

[destination]
bucket = "devops-veera-logs"
"#,
        )
        .unwrap();

        let code = ValidateArgs::default()
            .execute(path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
