use crate::error::AppError;
use uuid::Uuid;

/// Maps a bearer credential to a user identity, or fails.
#[cfg_attr(test, mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Uuid, AppError>;
}
