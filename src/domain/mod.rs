//! Domain layer - Pure business logic.

pub mod aspect;
pub mod keys;
pub mod media_type;
pub mod video;
