//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "logvault.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing logvault configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your log group, stream and bucket", self.output);
                println!("  2. Provide AWS credentials via the environment or an IAM role");
                println!("  3. Validate configuration: logvault validate-config --check-access");
                println!("  4. Run export: logvault export --dry-run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# logvault Configuration File
# Exports the trailing window of a CloudWatch Logs stream to S3 as gzipped JSON

[application]
log_level = "info"

[source]
log_group = "devops-veera"
log_stream = "devops"

# Maximum events per export (1-10000); a single page is read
max_records = 10000

# Window length in seconds, ending at the invocation time
lookback_seconds = 86400

# Keep the oldest events instead of the newest when the window overflows
start_from_head = false

[destination]
bucket = "devops-veera-logs"

# Objects are written to <key_prefix>/logs-<epoch-seconds>.json.gz
key_prefix = "cloudwatch-logs"
content_type = "application/gzip"

# gzip level 0-9
compression_level = 9

[aws]
# region = "us-east-1"
# endpoint_url = "http://localhost:4566"   # LocalStack
# force_path_style = true
#
# Static credentials (optional, the default provider chain is used otherwise)
# access_key_id = "${AWS_ACCESS_KEY_ID}"
# secret_access_key = "${AWS_SECRET_ACCESS_KEY}"

[export]
# Build the artifact but skip the upload
dry_run = false

[logging]
# Console output format: text | json
format = "text"

# Local file logging
local_enabled = false
local_path = "/tmp/logvault"

# Rotation: daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
