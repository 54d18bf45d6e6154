//! Raw command runners for the external media tools.
//!
//! Keeping the `Command` invocations behind these traits lets the parsing
//! and orchestration code above them run against canned `Output` values in
//! tests.

use async_trait::async_trait;
use std::io;
use std::path::Path;
use std::process::Output;
use tokio::process::Command as TokioCommand;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProbeCommandRunner: Send + Sync {
    async fn run_ffprobe_streams(&self, path: &Path) -> io::Result<Output>;
}

pub struct FfprobeCommandRunner;

#[async_trait]
impl ProbeCommandRunner for FfprobeCommandRunner {
    async fn run_ffprobe_streams(&self, path: &Path) -> io::Result<Output> {
        TokioCommand::new("ffprobe")
            .arg("-v")
            .arg("error")
            .arg("-print_format")
            .arg("json")
            .arg("-show_streams")
            .arg(path)
            .output()
            .await
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemuxCommandRunner: Send + Sync {
    async fn run_ffmpeg_faststart(&self, input: &Path, output: &Path) -> io::Result<Output>;
}

pub struct FfmpegCommandRunner;

#[async_trait]
impl RemuxCommandRunner for FfmpegCommandRunner {
    async fn run_ffmpeg_faststart(&self, input: &Path, output: &Path) -> io::Result<Output> {
        // Stream copy into an MP4 container with the moov atom up front.
        TokioCommand::new("ffmpeg")
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-c")
            .arg("copy")
            .arg("-movflags")
            .arg("faststart")
            .arg("-f")
            .arg("mp4")
            .arg(output)
            .output()
            .await
    }
}
