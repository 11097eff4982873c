//! Gzip compression of export payloads

use crate::domain::{LogVaultError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compresses `data` into a single gzip member
///
/// `level` ranges from 0 (store) to 9 (best).
pub fn gzip_compress(data: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(
        Vec::with_capacity(data.len() / 4 + 32),
        Compression::new(level),
    );
    encoder
        .write_all(data)
        .map_err(|e| LogVaultError::Compression(format!("Failed to write gzip stream: {e}")))?;
    encoder
        .finish()
        .map_err(|e| LogVaultError::Compression(format!("Failed to finish gzip stream: {e}")))
}

/// Inflates a gzip payload produced by [`gzip_compress`]
pub fn gzip_decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| LogVaultError::Compression(format!("Failed to read gzip stream: {e}")))?;
    Ok(out)
}
