// logvault - CloudWatch Logs to S3 Exporter
// Copyright (c) 2025 logvault Contributors
// Licensed under the MIT License

//! # logvault - CloudWatch Logs to S3 Exporter
//!
//! logvault is a scheduled job that archives the trailing window of a
//! CloudWatch Logs stream to S3 as a gzip-compressed JSON array.
//!
//! ## Overview
//!
//! Each invocation:
//! - **Reads** up to 10,000 events from one log stream for the last 24 hours
//! - **Serializes** them to a JSON array of `{timestamp, message, ingestionTime}`
//! - **Compresses** the array with gzip
//! - **Writes** one object to `cloudwatch-logs/logs-<epoch-seconds>.json.gz`
//!
//! It runs either as an AWS Lambda function or as a one-shot CLI command.
//!
//! ## Architecture
//!
//! logvault follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export job, artifact building, clock)
//! - [`adapters`] - External integrations (CloudWatch Logs, S3)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logvault::adapters::factory::build_clients;
//! use logvault::config::load_config;
//! use logvault::core::clock::SystemClock;
//! use logvault::core::export::ExportJob;
//! use logvault::domain::{InvocationContext, Trigger};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("logvault.toml")?;
//!
//!     // Create clients once and hand them to the job
//!     let clients = build_clients(&config).await?;
//!     let job = ExportJob::from_clients(config, clients, Arc::new(SystemClock));
//!
//!     // Execute one export
//!     let response = job
//!         .run(&Trigger::manual(), &InvocationContext::generated())
//!         .await?;
//!
//!     println!("{}", response.body);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! logvault uses the [`domain::LogVaultError`] type for all errors:
//!
//! ```rust,no_run
//! use logvault::domain::LogVaultError;
//!
//! fn example() -> Result<(), LogVaultError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = logvault::config::load_config("logvault.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! logvault uses structured logging with the `tracing` crate. Every export
//! runs inside an `export` span carrying the invocation's request id.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
