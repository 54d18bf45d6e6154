//! External tool boundary: ffprobe / ffmpeg subprocess invocations behind
//! mockable runner traits, and the `Prober` / `Transcoder` implementations
//! built on top of them.

pub mod cmd;
pub mod faststart;
pub mod probe;

pub use faststart::FfmpegTranscoder;
pub use probe::FfprobeProber;
