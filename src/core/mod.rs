//! Core business logic for logvault.
//!
//! # Modules
//!
//! - [`artifact`] - JSON serialization and gzip compression of fetched records
//! - [`clock`] - Time source used for the query window and object key
//! - [`export`] - Export job orchestration and reporting
//!
//! # Export Workflow
//!
//! 1. **Clock**: Read the current time once
//! 2. **Window**: Derive `[now - lookback, now)` in epoch milliseconds
//! 3. **Fetch**: Read a single page of events from the log stream
//! 4. **Build**: Serialize to a JSON array and gzip it
//! 5. **Upload**: Put the object under `<prefix>/logs-<epoch-seconds>.json.gz`
//! 6. **Report**: Log the export summary
//!
//! # Example
//!
//! ```rust,no_run
//! use logvault::adapters::factory::build_clients;
//! use logvault::config::load_config;
//! use logvault::core::clock::SystemClock;
//! use logvault::core::export::ExportJob;
//! use logvault::domain::{InvocationContext, Trigger};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("logvault.toml")?;
//! let clients = build_clients(&config).await?;
//! let job = ExportJob::from_clients(config, clients, Arc::new(SystemClock));
//!
//! let response = job
//!     .run(&Trigger::manual(), &InvocationContext::generated())
//!     .await?;
//! println!("{}", response.status_code);
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod clock;
pub mod export;
