//! Content-addressed storage-key generation.

use crate::domain::aspect::AspectClass;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;

/// Entropy per key. 256 bits makes collisions negligible, so no uniqueness
/// check against the store is performed.
const RAW_KEY_BYTES: usize = 32;

/// Derive an object key of the form `{prefix}/{token}.{ext}`, where the
/// token is 43 characters of URL-safe unpadded base64.
pub fn object_key(class: AspectClass, extension: &str) -> String {
    let mut raw = [0u8; RAW_KEY_BYTES];
    rand::rng().fill_bytes(&mut raw);
    let token = URL_SAFE_NO_PAD.encode(raw);
    format!("{}/{}.{}", class.prefix(), token, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn key_matches_expected_shape() {
        let re = Regex::new(r"^(landscape|portrait|other)/[A-Za-z0-9_-]{43}\.mp4$").unwrap();
        for class in [
            AspectClass::Landscape,
            AspectClass::Portrait,
            AspectClass::Other,
        ] {
            let key = object_key(class, "mp4");
            assert!(re.is_match(&key), "unexpected key shape: {}", key);
            assert!(key.starts_with(class.prefix()));
        }
    }

    #[test]
    fn extension_is_appended_verbatim() {
        let key = object_key(AspectClass::Portrait, "mov");
        assert!(key.ends_with(".mov"));
    }

    #[test]
    fn consecutive_keys_differ() {
        let a = object_key(AspectClass::Landscape, "mp4");
        let b = object_key(AspectClass::Landscape, "mp4");
        assert_ne!(a, b);
    }
}
