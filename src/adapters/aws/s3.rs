use crate::error::AppError;
use crate::ports::storage::ObjectStorePort;
use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::path::Path;
use std::time::Duration;

/// S3ObjectStore implements ObjectStorePort for AWS S3.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStorePort for S3ObjectStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        local_path: &Path,
    ) -> Result<(), AppError> {
        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|e| AppError::Store(format!("failed to read {:?}: {}", local_path, e)))?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, bucket = %bucket, key = %key, "S3 put failed");
                AppError::Store(format!("put {}/{} failed: {}", bucket, key, e))
            })?;

        tracing::info!(bucket = %bucket, key = %key, "S3 put successful");
        Ok(())
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, AppError> {
        let config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| AppError::Store(format!("invalid presign expiry: {}", e)))?;

        let request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(config)
            .await
            .map_err(|e| AppError::Store(format!("presign {}/{} failed: {}", bucket, key, e)))?;

        Ok(request.uri().to_string())
    }
}
