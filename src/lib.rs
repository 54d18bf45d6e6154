//! Vidvault - Video Ingestion Backend
//!
//! Hexagonal Architecture:
//! - domain/: Pure business logic (aspect classification, keys, records)
//! - ports/: Trait definitions
//! - adapters/: Concrete implementations (S3, DynamoDB, JWT)
//! - av/: ffprobe/ffmpeg subprocess boundary
//! - application/: The ingestion workflow over the ports
//! - http: axum router and upload handler
//! - config: Environment configuration

pub mod adapters;
pub mod application;
pub mod av;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod ports;

// Re-exports for convenience
pub use application::ingest::IngestService;
pub use config::AppConfig;
pub use error::AppError;
