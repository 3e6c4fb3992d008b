//! Password digest value object
//!
//! Only the SHA-256 digest of a password is ever held or persisted.
//! The store keeps the bare lowercase hex string.

use std::fmt;

use sha2::{Digest, Sha256};

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Digest a plaintext password
    pub fn from_secret(secret: &str) -> Self {
        let hash = Sha256::digest(secret.as_bytes());
        Self(format!("{:x}", hash))
    }

    /// Wrap a digest read back from the store, without re-hashing it
    pub fn from_stored(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check a candidate plaintext against this digest
    pub fn matches_secret(&self, candidate: &str) -> bool {
        *self == Self::from_secret(candidate)
    }
}

// Keep digests out of debug output.
impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

impl AsRef<str> for PasswordDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_secret_is_sha256_hex() {
        let digest = PasswordDigest::from_secret("hello");
        assert_eq!(
            digest.as_str(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn same_secret_same_digest() {
        assert_eq!(
            PasswordDigest::from_secret("pw"),
            PasswordDigest::from_secret("pw")
        );
        assert_ne!(
            PasswordDigest::from_secret("pw"),
            PasswordDigest::from_secret("pw ")
        );
    }

    #[test]
    fn from_stored_is_not_rehashed() {
        let original = PasswordDigest::from_secret("secret");
        let restored = PasswordDigest::from_stored(original.as_str());
        assert_eq!(original, restored);
        assert!(restored.matches_secret("secret"));
        assert!(!restored.matches_secret("Secret"));
    }

    #[test]
    fn debug_hides_digest() {
        let digest = PasswordDigest::from_secret("pw");
        assert_eq!(format!("{:?}", digest), "PasswordDigest(..)");
    }
}
