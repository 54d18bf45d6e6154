//! Environment configuration.

use std::env;
use std::path::PathBuf;

/// Immutable application configuration, loaded once at startup and passed by
/// reference into the ingestion service.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP server bind address
    pub addr: String,
    /// HTTP server port
    pub port: String,
    /// Secret used to verify bearer tokens
    pub jwt_secret: String,
    /// S3 bucket for stored videos
    pub s3_bucket: String,
    /// DynamoDB table holding video records
    pub dynamodb_table: String,
    /// Directory for staged uploads and transcode output
    pub upload_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Panics if required variables are not set.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            addr: env::var("ADDR").unwrap_or_else(|_| String::from("127.0.0.1")),
            port: env::var("PORT").unwrap_or_else(|_| String::from("3000")),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET env var required"),
            s3_bucket: env::var("S3_BUCKET").expect("S3_BUCKET env var required"),
            dynamodb_table: env::var("DYNAMODB_TABLE").expect("DYNAMODB_TABLE env var required"),
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::temp_dir()),
        }
    }
}
