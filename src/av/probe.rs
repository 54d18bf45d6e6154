//! Format inspection via ffprobe.

use crate::av::cmd::{FfprobeCommandRunner, ProbeCommandRunner};
use crate::domain::aspect::{classify, AspectClass, StreamGeometry};
use crate::error::AppError;
use crate::ports::media::Prober;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ProbeReport {
    #[serde(default)]
    streams: Vec<StreamGeometry>,
}

/// `Prober` implementation that shells out to ffprobe and classifies the
/// parsed stream report.
pub struct FfprobeProber<R = FfprobeCommandRunner> {
    runner: R,
}

impl FfprobeProber {
    pub fn new() -> Self {
        Self {
            runner: FfprobeCommandRunner,
        }
    }
}

impl Default for FfprobeProber {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ProbeCommandRunner> FfprobeProber<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl<R: ProbeCommandRunner> Prober for FfprobeProber<R> {
    async fn inspect(&self, path: &Path) -> Result<AspectClass, AppError> {
        let output = self
            .runner
            .run_ffprobe_streams(path)
            .await
            .map_err(|e| AppError::Probe(format!("failed to run ffprobe: {}", e)))?;

        if !output.status.success() {
            return Err(AppError::Probe(format!(
                "ffprobe exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let report: ProbeReport = serde_json::from_slice(&output.stdout)
            .map_err(|e| AppError::Probe(format!("unparseable ffprobe report: {}", e)))?;

        classify(&report.streams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::av::cmd::MockProbeCommandRunner;
    use std::os::unix::process::ExitStatusExt;
    use std::path::PathBuf;
    use std::process::{ExitStatus, Output};

    fn output(code: i32, stdout: &str, stderr: &str) -> Output {
        Output {
            status: ExitStatus::from_raw(code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    fn prober_with(out: Output) -> FfprobeProber<MockProbeCommandRunner> {
        let mut runner = MockProbeCommandRunner::new();
        runner
            .expect_run_ffprobe_streams()
            .times(1)
            .returning(move |_| Ok(out.clone()));
        FfprobeProber::with_runner(runner)
    }

    #[tokio::test]
    async fn classifies_landscape_from_geometry() {
        let report = r#"{"streams":[{"width":1920,"height":1080},{"codec_type":"audio"}]}"#;
        let prober = prober_with(output(0, report, ""));
        let class = prober.inspect(&PathBuf::from("in.mp4")).await.unwrap();
        assert_eq!(class, AspectClass::Landscape);
    }

    #[tokio::test]
    async fn explicit_aspect_string_takes_precedence() {
        let report =
            r#"{"streams":[{"width":1000,"height":1000,"display_aspect_ratio":"9:16"}]}"#;
        let prober = prober_with(output(0, report, ""));
        let class = prober.inspect(&PathBuf::from("in.mp4")).await.unwrap();
        assert_eq!(class, AspectClass::Portrait);
    }

    #[tokio::test]
    async fn empty_stream_list_is_no_streams() {
        let prober = prober_with(output(0, r#"{"streams":[]}"#, ""));
        let err = prober.inspect(&PathBuf::from("in.mp4")).await.unwrap_err();
        assert!(matches!(err, AppError::NoStreams(_)));
    }

    #[tokio::test]
    async fn nonzero_exit_is_probe_error() {
        let prober = prober_with(output(1, "", "in.mp4: Invalid data found"));
        let err = prober.inspect(&PathBuf::from("in.mp4")).await.unwrap_err();
        match err {
            AppError::Probe(msg) => assert!(msg.contains("Invalid data found")),
            other => panic!("expected probe error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn garbage_stdout_is_probe_error() {
        let prober = prober_with(output(0, "not json", ""));
        let err = prober.inspect(&PathBuf::from("in.mp4")).await.unwrap_err();
        assert!(matches!(err, AppError::Probe(_)));
    }
}
