//! Domain models and types for logvault.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Export window** ([`ExportWindow`]) - the trailing time range to fetch
//! - **Object key** ([`ObjectKey`]) - the artifact's identity in the bucket
//! - **Log record** ([`LogRecord`]) - one event as returned by the source
//! - **Invocation types** ([`Trigger`], [`InvocationContext`], [`InvocationResponse`])
//! - **Error types** ([`LogVaultError`], [`LogSourceError`], [`ObjectStoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use logvault::domain::{ExportWindow, ObjectKey};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
//! let window = ExportWindow::ending_at(now, 86_400);
//! let key = ObjectKey::for_export("cloudwatch-logs", now)?;
//!
//! assert_eq!(window.start_ms, 1_699_913_600_000);
//! assert_eq!(key.as_str(), "cloudwatch-logs/logs-1700000000.json.gz");
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod invocation;
pub mod key;
pub mod record;
pub mod result;
pub mod window;

pub use errors::{LogSourceError, LogVaultError, ObjectStoreError};
pub use invocation::{InvocationContext, InvocationResponse, Trigger, SUCCESS_MESSAGE};
pub use key::{ObjectKey, DEFAULT_KEY_PREFIX};
pub use record::LogRecord;
pub use result::Result;
pub use window::{ExportWindow, DEFAULT_LOOKBACK_SECONDS, MAX_LOOKBACK_SECONDS};
