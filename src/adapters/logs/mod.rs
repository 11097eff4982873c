//! Log source adapters

pub mod cloudwatch;
pub mod traits;

pub use cloudwatch::CloudWatchLogSource;
pub use traits::{FetchRequest, LogSource};
