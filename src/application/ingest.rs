//! The video ingestion workflow.
//!
//! One strictly sequential pass per request:
//! authenticate → authorize → validate → stage → inspect → transcode →
//! derive key → upload → persist → sign. The first failing step aborts the
//! rest; staged files and transcode artifacts are removed on every exit
//! path.

use crate::config::AppConfig;
use crate::domain::keys::object_key;
use crate::domain::media_type::{video_extension, ACCEPTED_VIDEO_TYPE};
use crate::domain::video::{StoredObjectRef, VideoRecord};
use crate::error::AppError;
use crate::ports::auth::TokenVerifier;
use crate::ports::media::{Prober, Transcoder};
use crate::ports::repository::VideoRepository;
use crate::ports::storage::ObjectStorePort;
use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::{fs::File, io::BufWriter};
use tokio_util::io::StreamReader;
use uuid::Uuid;

/// Validity of the signed URL returned in the response. The durable record
/// keeps the unsigned composite reference.
pub const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

pub struct IngestService<S, R, A, P, T> {
    config: Arc<AppConfig>,
    storage: S,
    repo: R,
    auth: A,
    prober: P,
    transcoder: T,
}

/// Removes the transcode output when the workflow ends, success or not.
struct TempArtifact(PathBuf);

impl TempArtifact {
    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

impl<S, R, A, P, T> IngestService<S, R, A, P, T>
where
    S: ObjectStorePort,
    R: VideoRepository,
    A: TokenVerifier,
    P: Prober,
    T: Transcoder,
{
    pub fn new(config: Arc<AppConfig>, storage: S, repo: R, auth: A, prober: P, transcoder: T) -> Self {
        Self {
            config,
            storage,
            repo,
            auth,
            prober,
            transcoder,
        }
    }

    /// Run the full ingestion workflow for one uploaded video body.
    ///
    /// `declared_type` is the content-type announced by the multipart field;
    /// the body is not consumed unless it passes validation.
    pub async fn ingest_video<B, E>(
        &self,
        video_id: Uuid,
        bearer: Option<&str>,
        declared_type: Option<&str>,
        body: B,
    ) -> Result<VideoRecord, AppError>
    where
        B: Stream<Item = Result<Bytes, E>>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        // Authenticating
        let token = bearer
            .ok_or_else(|| AppError::Unauthenticated("missing bearer token".into()))?;
        let user_id = self.auth.verify(token)?;

        // Authorizing
        let mut record = self
            .repo
            .get_video(video_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no video with id {}", video_id)))?;
        if record.user_id != user_id {
            return Err(AppError::Forbidden("user does not own video".into()));
        }

        // Validating
        let media_type = declared_type
            .ok_or_else(|| AppError::UnsupportedMediaType("missing content type".into()))?;
        if media_type != ACCEPTED_VIDEO_TYPE {
            return Err(AppError::UnsupportedMediaType(media_type.into()));
        }
        let extension = video_extension(media_type)
            .ok_or_else(|| AppError::UnsupportedMediaType(media_type.into()))?;

        tracing::info!(video_id = %video_id, user_id = %user_id, "ingesting video");

        // Staging - NamedTempFile removes itself when dropped, which covers
        // every exit path below.
        let staged = tempfile::Builder::new()
            .prefix("video-upload-")
            .suffix(&format!(".{}", extension))
            .tempfile_in(&self.config.upload_dir)?;
        stage_body(staged.path(), body).await?;

        // Inspecting
        let class = self.prober.inspect(staged.path()).await?;

        // Transcoding
        let artifact = TempArtifact(self.transcoder.fast_start(staged.path()).await?);

        // KeyDerivation
        let key = object_key(class, extension);

        // Uploading
        self.storage
            .put(&self.config.s3_bucket, &key, media_type, artifact.path())
            .await?;

        // Persisting - the object is already stored; a failure here leaves
        // it unreferenced, to be reclaimed by external reconciliation.
        let object_ref = StoredObjectRef::new(self.config.s3_bucket.clone(), key);
        record.video_url = Some(object_ref.encode());
        self.repo.update_video(&record).await?;

        // Signing
        self.signed_for_response(record).await
    }

    /// Replace the composite reference with a presigned URL for the response
    /// payload. A record without a parseable reference is returned as-is.
    async fn signed_for_response(&self, mut record: VideoRecord) -> Result<VideoRecord, AppError> {
        let Some(object_ref) = record.video_url.as_deref().and_then(StoredObjectRef::parse)
        else {
            return Ok(record);
        };

        let signed = self
            .storage
            .presign_get(&object_ref.bucket, &object_ref.key, SIGNED_URL_TTL)
            .await?;
        record.video_url = Some(signed);
        Ok(record)
    }
}

/// Write a request body stream to `path`.
async fn stage_body<B, E>(path: &Path, body: B) -> Result<(), AppError>
where
    B: Stream<Item = Result<Bytes, E>>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let body_with_io_error = body.map_err(|err| io::Error::new(io::ErrorKind::Other, err));
    let body_reader = StreamReader::new(body_with_io_error);
    futures::pin_mut!(body_reader);

    let mut file = BufWriter::new(File::create(path).await?);
    tokio::io::copy(&mut body_reader, &mut file).await?;

    Ok(())
}
