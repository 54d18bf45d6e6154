//! HTTP layer: router and the upload handler.

use crate::application::ingest::IngestService;
use crate::domain::video::VideoRecord;
use crate::error::AppError;
use crate::ports::auth::TokenVerifier;
use crate::ports::media::{Prober, Transcoder};
use crate::ports::repository::VideoRepository;
use crate::ports::storage::ObjectStorePort;
use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::header::AUTHORIZATION,
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

/// The multipart field carrying the uploaded file.
const VIDEO_FIELD: &str = "video";

pub fn router<S, R, A, P, T>(service: Arc<IngestService<S, R, A, P, T>>) -> Router
where
    S: ObjectStorePort + 'static,
    R: VideoRepository + 'static,
    A: TokenVerifier + 'static,
    P: Prober + 'static,
    T: Transcoder + 'static,
{
    Router::new()
        .route("/api/videos/:video_id/upload", post(upload_video::<S, R, A, P, T>))
        .layer(DefaultBodyLimit::disable())
        .with_state(service)
}

/// Handler that authenticates the caller and streams the `video` multipart
/// field through the ingestion workflow.
async fn upload_video<S, R, A, P, T>(
    State(service): State<Arc<IngestService<S, R, A, P, T>>>,
    Path(video_id): Path<String>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<VideoRecord>, AppError>
where
    S: ObjectStorePort,
    R: VideoRepository,
    A: TokenVerifier,
    P: Prober,
    T: Transcoder,
{
    let video_id = Uuid::parse_str(&video_id)
        .map_err(|_| AppError::Validation(format!("invalid video id: {}", video_id)))?;
    let bearer = bearer_token(&headers);

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {}", e)))?
    {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }

        let declared_type = field.content_type().map(str::to_owned);
        let record = service
            .ingest_video(video_id, bearer.as_deref(), declared_type.as_deref(), field)
            .await?;
        return Ok(Json(record));
    }

    Err(AppError::Validation(format!(
        "missing multipart field `{}`",
        VIDEO_FIELD
    )))
}

/// Extract the bearer credential from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let token = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
