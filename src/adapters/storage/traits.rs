//! Object store abstraction

use crate::domain::{ObjectKey, Result};
use async_trait::async_trait;

/// A single object write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRequest {
    /// Destination bucket
    pub bucket: String,

    /// Object key
    pub key: ObjectKey,

    /// Object body
    pub body: Vec<u8>,

    /// Content-Type header value
    pub content_type: String,
}

/// Object store trait
///
/// A put to an existing key replaces the object; there is no conflict check.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write one object in a single request
    ///
    /// # Errors
    ///
    /// Returns an [`ObjectStoreError`](crate::domain::ObjectStoreError)
    /// wrapped in `LogVaultError` when the write fails.
    async fn put_object(&self, request: PutRequest) -> Result<()>;

    /// Verify the bucket exists and is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket is missing or access is denied.
    async fn check_access(&self, bucket: &str) -> Result<()>;
}
