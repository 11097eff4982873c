//! S3 implementation of [`ObjectStore`]

use super::traits::{ObjectStore, PutRequest};
use crate::domain::{LogVaultError, ObjectStoreError, Result};
use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

/// S3 writer
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Create a new store from an SDK client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, request: PutRequest) -> Result<()> {
        let size = request.body.len();
        tracing::debug!(
            bucket = %request.bucket,
            key = %request.key,
            size,
            "Calling PutObject"
        );

        self.client
            .put_object()
            .bucket(&request.bucket)
            .key(request.key.as_str())
            .content_type(&request.content_type)
            .body(ByteStream::from(request.body))
            .send()
            .await
            .map_err(|e| LogVaultError::ObjectStore(classify_sdk_error(&e)))?;

        Ok(())
    }

    async fn check_access(&self, bucket: &str) -> Result<()> {
        self.client
            .head_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| LogVaultError::ObjectStore(classify_sdk_error(&e)))?;
        Ok(())
    }
}

fn classify_sdk_error<E, R>(err: &SdkError<E, R>) -> ObjectStoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(err).to_string();
    classify_error_code(err.as_service_error().and_then(|e| e.code()), message)
}

/// Map an S3 error code onto [`ObjectStoreError`]
pub fn classify_error_code(code: Option<&str>, message: String) -> ObjectStoreError {
    match code {
        Some("NoSuchBucket" | "NotFound") => ObjectStoreError::BucketNotFound(message),
        Some(
            "AccessDenied"
            | "InvalidAccessKeyId"
            | "SignatureDoesNotMatch"
            | "ExpiredToken"
            | "Forbidden",
        ) => ObjectStoreError::AccessDenied(message),
        Some("SlowDown" | "Throttling" | "RequestLimitExceeded") => {
            ObjectStoreError::Throttled(message)
        }
        _ => ObjectStoreError::WriteFailed(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_error_code() {
        let msg = || "boom".to_string();
        assert!(matches!(
            classify_error_code(Some("NoSuchBucket"), msg()),
            ObjectStoreError::BucketNotFound(_)
        ));
        assert!(matches!(
            classify_error_code(Some("NotFound"), msg()),
            ObjectStoreError::BucketNotFound(_)
        ));
        assert!(matches!(
            classify_error_code(Some("InvalidAccessKeyId"), msg()),
            ObjectStoreError::AccessDenied(_)
        ));
        assert!(matches!(
            classify_error_code(Some("SlowDown"), msg()),
            ObjectStoreError::Throttled(_)
        ));
        assert!(matches!(
            classify_error_code(Some("InternalError"), msg()),
            ObjectStoreError::WriteFailed(_)
        ));
        assert!(matches!(
            classify_error_code(None, msg()),
            ObjectStoreError::WriteFailed(_)
        ));
    }
}
