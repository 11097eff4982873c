//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for logvault using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// logvault - CloudWatch Logs to S3 exporter
#[derive(Parser, Debug)]
#[command(name = "logvault")]
#[command(version, about, long_about = None)]
#[command(author = "logvault Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "logvault.toml", env = "LOGVAULT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOGVAULT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one export of the trailing log window to S3
    Export(commands::export::ExportArgs),

    /// Run as an AWS Lambda function, one export per event
    Lambda(commands::lambda::LambdaArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
