//! Aspect-ratio classification of probed video streams.
//!
//! The classification only picks a storage-key prefix; it is never persisted
//! on its own. An explicit `display_aspect_ratio` reported by the probe
//! always wins over numeric inference from the frame geometry, even when the
//! two disagree.

use crate::error::AppError;
use serde::Deserialize;

/// Coarse display-geometry bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectClass {
    Landscape,
    Portrait,
    Other,
}

impl AspectClass {
    /// Storage-key prefix for this bucket.
    pub fn prefix(&self) -> &'static str {
        match self {
            AspectClass::Landscape => "landscape",
            AspectClass::Portrait => "portrait",
            AspectClass::Other => "other",
        }
    }
}

/// One stream entry of an ffprobe `-show_streams` report. Audio streams
/// carry no geometry, hence the defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamGeometry {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub display_aspect_ratio: String,
}

const RATIO_TOLERANCE: f64 = 1e-3;

fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= RATIO_TOLERANCE
}

/// Classify a probed stream list.
///
/// The first stream with a non-empty explicit aspect string decides the
/// bucket. Otherwise the first stream's width/height ratio is matched
/// against 16:9 and 9:16 within a small tolerance.
pub fn classify(streams: &[StreamGeometry]) -> Result<AspectClass, AppError> {
    if streams.is_empty() {
        return Err(AppError::NoStreams("probe report lists no streams".into()));
    }

    for stream in streams {
        if !stream.display_aspect_ratio.is_empty() {
            return Ok(match stream.display_aspect_ratio.as_str() {
                "16:9" => AspectClass::Landscape,
                "9:16" => AspectClass::Portrait,
                _ => AspectClass::Other,
            });
        }
    }

    let first = &streams[0];
    if first.height == 0 {
        return Err(AppError::NoStreams(format!(
            "invalid stream geometry {}x{}",
            first.width, first.height
        )));
    }

    let ratio = f64::from(first.width) / f64::from(first.height);
    if almost_equal(ratio, 16.0 / 9.0) {
        Ok(AspectClass::Landscape)
    } else if almost_equal(ratio, 9.0 / 16.0) {
        Ok(AspectClass::Portrait)
    } else {
        Ok(AspectClass::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(width: u32, height: u32, dar: &str) -> StreamGeometry {
        StreamGeometry {
            width,
            height,
            display_aspect_ratio: dar.to_string(),
        }
    }

    #[test]
    fn explicit_string_wins_over_geometry() {
        // Square frame, but the container says portrait.
        let streams = vec![geometry(1000, 1000, "9:16")];
        assert_eq!(classify(&streams).unwrap(), AspectClass::Portrait);

        let streams = vec![geometry(1000, 1000, "16:9")];
        assert_eq!(classify(&streams).unwrap(), AspectClass::Landscape);
    }

    #[test]
    fn first_non_empty_explicit_string_is_used() {
        let streams = vec![geometry(0, 0, ""), geometry(1920, 1080, "4:3")];
        assert_eq!(classify(&streams).unwrap(), AspectClass::Other);
    }

    #[test]
    fn numeric_fallback_buckets() {
        assert_eq!(
            classify(&[geometry(1920, 1080, "")]).unwrap(),
            AspectClass::Landscape
        );
        assert_eq!(
            classify(&[geometry(1080, 1920, "")]).unwrap(),
            AspectClass::Portrait
        );
        assert_eq!(
            classify(&[geometry(1000, 1000, "")]).unwrap(),
            AspectClass::Other
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let streams = vec![geometry(1280, 720, "")];
        let first = classify(&streams).unwrap();
        for _ in 0..10 {
            assert_eq!(classify(&streams).unwrap(), first);
        }
    }

    #[test]
    fn empty_report_fails_with_no_streams() {
        let err = classify(&[]).unwrap_err();
        assert!(matches!(err, AppError::NoStreams(_)));
    }

    #[test]
    fn zero_height_does_not_divide() {
        let err = classify(&[geometry(1920, 0, "")]).unwrap_err();
        assert!(matches!(err, AppError::NoStreams(_)));
    }
}
