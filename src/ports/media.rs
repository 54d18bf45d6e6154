use crate::domain::aspect::AspectClass;
use crate::error::AppError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Inspects a local media file and classifies its display geometry.
/// Injectable so tests never have to spawn a real probe process.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Prober: Send + Sync {
    async fn inspect(&self, path: &Path) -> Result<AspectClass, AppError>;
}

/// Produces a fast-start remux of a local media file and returns the output
/// path. Stream copy only, no re-encoding.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn fast_start(&self, path: &Path) -> Result<PathBuf, AppError>;
}
