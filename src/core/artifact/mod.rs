//! Export artifact construction
//!
//! An artifact is built once per invocation from the fetched records:
//! serialize to a JSON array, gzip it, and pair it with its object key.

pub mod compress;
pub mod serialize;

pub use compress::{gzip_compress, gzip_decompress};
pub use serialize::serialize_records;

use crate::domain::{LogRecord, ObjectKey, Result};

/// Compressed export payload ready for upload
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    key: ObjectKey,
    body: Vec<u8>,
    record_count: usize,
    payload_bytes: usize,
}

impl ExportArtifact {
    /// Serializes and compresses `records` for upload under `key`
    pub fn build(key: ObjectKey, records: &[LogRecord], compression_level: u32) -> Result<Self> {
        let payload = serialize_records(records)?;
        let body = gzip_compress(&payload, compression_level)?;

        Ok(Self {
            key,
            body,
            record_count: records.len(),
            payload_bytes: payload.len(),
        })
    }

    /// Destination key
    pub fn key(&self) -> &ObjectKey {
        &self.key
    }

    /// Compressed bytes
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Number of records in the payload
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Size of the JSON payload before compression
    pub fn payload_bytes(&self) -> usize {
        self.payload_bytes
    }

    /// Size of the compressed body
    pub fn compressed_bytes(&self) -> usize {
        self.body.len()
    }

    /// Consumes the artifact, returning key and body
    pub fn into_parts(self) -> (ObjectKey, Vec<u8>) {
        (self.key, self.body)
    }
}
