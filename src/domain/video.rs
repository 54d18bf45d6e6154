//! Video records and stored-object references.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A video record as held by the record store. Created elsewhere before
/// ingestion; this service only fills in `video_url` on a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// Location of a stored object, persisted as a single `{bucket},{key}`
/// string in the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObjectRef {
    pub bucket: String,
    pub key: String,
}

impl StoredObjectRef {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Encode as the persisted composite form.
    pub fn encode(&self) -> String {
        format!("{},{}", self.bucket, self.key)
    }

    /// Decode a persisted composite reference. Splits on the first comma
    /// only, so keys containing commas survive a round trip.
    pub fn parse(raw: &str) -> Option<Self> {
        let (bucket, key) = raw.split_once(',')?;
        if bucket.is_empty() || key.is_empty() {
            return None;
        }
        Some(Self::new(bucket, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_parse_round_trip() {
        let obj = StoredObjectRef::new("tube-videos", "landscape/abc123.mp4");
        let parsed = StoredObjectRef::parse(&obj.encode()).unwrap();
        assert_eq!(parsed, obj);
    }

    #[test]
    fn parse_splits_on_first_comma_only() {
        let parsed = StoredObjectRef::parse("tube-videos,other/a,b.mp4").unwrap();
        assert_eq!(parsed.bucket, "tube-videos");
        assert_eq!(parsed.key, "other/a,b.mp4");
    }

    #[test]
    fn parse_rejects_malformed_references() {
        assert_eq!(StoredObjectRef::parse("no-delimiter"), None);
        assert_eq!(StoredObjectRef::parse(",key-only"), None);
        assert_eq!(StoredObjectRef::parse("bucket-only,"), None);
        assert_eq!(StoredObjectRef::parse(""), None);
    }
}
