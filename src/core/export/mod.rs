//! Export orchestration
//!
//! This module provides the core export logic for logvault:
//! - The per-invocation export job
//! - Summary and reporting

pub mod job;
pub mod summary;

pub use job::ExportJob;
pub use summary::ExportReport;
