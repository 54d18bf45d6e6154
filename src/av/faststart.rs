//! Fast-start remuxing via ffmpeg.

use crate::av::cmd::{FfmpegCommandRunner, RemuxCommandRunner};
use crate::error::AppError;
use crate::ports::media::Transcoder;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Output path for a fast-start remux of `input`. Deterministic so retries
/// of the same staged upload reuse one path instead of piling up temp files.
pub fn fast_start_output_path(input: &Path) -> PathBuf {
    let mut os = input.as_os_str().to_os_string();
    os.push(".faststart.mp4");
    PathBuf::from(os)
}

/// `Transcoder` implementation that shells out to ffmpeg with stream-copy
/// semantics and front-loaded container metadata.
pub struct FfmpegTranscoder<R = FfmpegCommandRunner> {
    runner: R,
}

impl FfmpegTranscoder {
    pub fn new() -> Self {
        Self {
            runner: FfmpegCommandRunner,
        }
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RemuxCommandRunner> FfmpegTranscoder<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl<R: RemuxCommandRunner> Transcoder for FfmpegTranscoder<R> {
    async fn fast_start(&self, path: &Path) -> Result<PathBuf, AppError> {
        let output_path = fast_start_output_path(path);

        let output = self
            .runner
            .run_ffmpeg_faststart(path, &output_path)
            .await
            .map_err(|e| AppError::Transcode(format!("failed to run ffmpeg: {}", e)))?;

        if !output.status.success() {
            // ffmpeg may have left a partial file behind.
            let _ = tokio::fs::remove_file(&output_path).await;
            return Err(AppError::Transcode(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::av::cmd::MockRemuxCommandRunner;
    use std::os::unix::process::ExitStatusExt;
    use std::process::{ExitStatus, Output};

    fn output(code: i32, stderr: &str) -> Output {
        Output {
            status: ExitStatus::from_raw(code << 8),
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn output_path_appends_fixed_suffix() {
        let out = fast_start_output_path(Path::new("/tmp/video-upload-x.mp4"));
        assert_eq!(
            out,
            PathBuf::from("/tmp/video-upload-x.mp4.faststart.mp4")
        );
    }

    #[tokio::test]
    async fn success_returns_derived_path() {
        let mut runner = MockRemuxCommandRunner::new();
        runner
            .expect_run_ffmpeg_faststart()
            .times(1)
            .returning(|_, _| Ok(output(0, "")));
        let transcoder = FfmpegTranscoder::with_runner(runner);

        let result = transcoder.fast_start(Path::new("in.mov")).await.unwrap();
        assert_eq!(result, PathBuf::from("in.mov.faststart.mp4"));
    }

    #[tokio::test]
    async fn failure_surfaces_stderr_and_removes_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.mp4");

        let mut runner = MockRemuxCommandRunner::new();
        runner
            .expect_run_ffmpeg_faststart()
            .times(1)
            .returning(|_, out| {
                // Simulate ffmpeg dying halfway through a write.
                std::fs::write(out, b"partial").unwrap();
                Ok(output(1, "moov atom not found"))
            });
        let transcoder = FfmpegTranscoder::with_runner(runner);

        let err = transcoder.fast_start(&input).await.unwrap_err();
        match err {
            AppError::Transcode(msg) => assert!(msg.contains("moov atom not found")),
            other => panic!("expected transcode error, got {:?}", other),
        }
        assert!(!fast_start_output_path(&input).exists());
    }
}
