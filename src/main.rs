use std::sync::Arc;

use vidvault::adapters::aws::{DynamoVideoRepository, S3ObjectStore};
use vidvault::adapters::jwt::JwtVerifier;
use vidvault::av::{FfmpegTranscoder, FfprobeProber};
use vidvault::{http, AppConfig, IngestService};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    tracing_subscriber::fmt::init();

    // AWS clients
    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let s3_client = aws_sdk_s3::Client::new(&aws);
    let dynamo_client = aws_sdk_dynamodb::Client::new(&aws);

    // Adapters
    let storage = S3ObjectStore::new(s3_client);
    let repo = DynamoVideoRepository::new(dynamo_client, config.dynamodb_table.clone());
    let auth = JwtVerifier::new(&config.jwt_secret);

    // Ingestion service
    let service = Arc::new(IngestService::new(
        Arc::new(config.clone()),
        storage,
        repo,
        auth,
        FfprobeProber::new(),
        FfmpegTranscoder::new(),
    ));

    let app = http::router(service);
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.addr, config.port))
        .await
        .expect("Failed to bind TCP listener");
    println!("Listening at {}:{}", config.addr, config.port);
    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
