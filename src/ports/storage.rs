use crate::error::AppError;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// Object storage: durable puts plus short-lived signed retrieval URLs.
/// Calls may be slow and are never retried by the core.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStorePort: Send + Sync {
    /// Store the file at `local_path` under `bucket`/`key`.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        local_path: &Path,
    ) -> Result<(), AppError>;

    /// Issue a presigned GET URL valid for `expires_in`.
    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, AppError>;
}
