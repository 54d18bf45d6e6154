//! Declared content-type handling.

/// The only media type the ingestion endpoint currently accepts. The
/// extension table below is broader, so widening the accepted set later is a
/// one-line change.
pub const ACCEPTED_VIDEO_TYPE: &str = "video/mp4";

/// Map a declared content-type to the file extension used for staged files
/// and storage keys. Returns `None` for anything we are not prepared to
/// transcode.
pub fn video_extension(media_type: &str) -> Option<&'static str> {
    match media_type {
        "video/mp4" => Some("mp4"),
        "video/quicktime" => Some("mov"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_video_types() {
        assert_eq!(video_extension("video/mp4"), Some("mp4"));
        assert_eq!(video_extension("video/quicktime"), Some("mov"));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(video_extension("video/webm"), None);
        assert_eq!(video_extension("image/png"), None);
        assert_eq!(video_extension("text/plain"), None);
        assert_eq!(video_extension(""), None);
    }
}
