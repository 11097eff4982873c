//! External system integrations for logvault.
//!
//! - [`logs`] - log source abstraction and the CloudWatch Logs reader
//! - [`storage`] - object store abstraction and the S3 writer
//! - [`factory`] - one-time construction of both clients
//!
//! # Design Pattern
//!
//! Adapters isolate the AWS SDK behind the [`LogSource`](logs::LogSource) and
//! [`ObjectStore`](storage::ObjectStore) traits. SDK error types are
//! classified into domain errors at this boundary, and the export job only
//! ever sees the traits, which lets tests drive it with in-memory doubles.
//!
//! # Example
//!
//! ```rust,no_run
//! use logvault::adapters::factory::build_clients;
//! use logvault::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("logvault.toml")?;
//! let clients = build_clients(&config).await?;
//! clients
//!     .log_source
//!     .check_access(&config.source.log_group, &config.source.log_stream)
//!     .await?;
//! clients.object_store.check_access(&config.destination.bucket).await?;
//! # Ok(())
//! # }
//! ```

pub mod factory;
pub mod logs;
pub mod storage;
