use crate::domain::video::VideoRecord;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Record store for video metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Fetch a video record by id. `None` if it does not exist.
    async fn get_video(&self, id: Uuid) -> Result<Option<VideoRecord>, AppError>;

    /// Write back an updated record.
    async fn update_video(&self, record: &VideoRecord) -> Result<(), AppError>;
}
