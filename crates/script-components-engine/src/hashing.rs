//! Default content digest for callers without their own hash function.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the text's UTF-8 bytes (64 characters).
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            content_hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_is_fixed_length_and_stable() {
        let first = content_hash("- Rapid heating");
        let second = content_hash("- Rapid heating");

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert_ne!(first, content_hash("Rapid heating"));
    }
}
