//! SHA-256 content checksums
//!
//! A checksum is taken when a target file is read and compared again right
//! before it is written back, so a concurrent edit is never silently lost.

use sha2::{Digest, Sha256};
use std::fmt;

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Canonical `sha256:<hex>` digest of some content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum(String);

impl Checksum {
    /// Compute the checksum of raw bytes.
    pub fn of_bytes(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        Self(format!("{}{:x}", PREFIX, hasher.finalize()))
    }

    /// Compute the checksum of string content.
    pub fn of_str(content: &str) -> Self {
        Self::of_bytes(content.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_has_prefix() {
        let checksum = Checksum::of_str("hello world");
        assert!(checksum.as_str().starts_with("sha256:"));
    }

    #[test]
    fn checksum_is_deterministic() {
        assert_eq!(Checksum::of_str("test"), Checksum::of_str("test"));
    }

    #[test]
    fn different_content_different_checksum() {
        assert_ne!(Checksum::of_str("aaa"), Checksum::of_str("bbb"));
    }

    #[test]
    fn checksum_known_value() {
        let checksum = Checksum::of_str("");
        assert_eq!(
            checksum.to_string(),
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn str_and_bytes_agree() {
        assert_eq!(Checksum::of_str("abc"), Checksum::of_bytes(b"abc"));
    }
}
