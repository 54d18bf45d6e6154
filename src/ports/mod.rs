//! Ports - Trait definitions consumed by the application layer.

pub mod auth;
pub mod media;
pub mod repository;
pub mod storage;
