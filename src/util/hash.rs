//! Hashing for package ids.

use sha2::{Digest, Sha256};

/// Incremental fingerprint over labelled components.
///
/// Each component is NUL-terminated so `("ab", "c")` and `("a", "bc")` differ.
#[derive(Default)]
pub struct Fingerprint {
    hasher: Sha256,
}

impl Fingerprint {
    pub fn new() -> Self {
        Fingerprint {
            hasher: Sha256::new(),
        }
    }

    /// Add a string component.
    pub fn update_str(&mut self, s: &str) -> &mut Self {
        self.hasher.update(s.as_bytes());
        self.hasher.update(b"\0");
        self
    }

    /// Add a `key=value` component.
    pub fn update_pair(&mut self, key: &str, value: &str) -> &mut Self {
        self.hasher.update(key.as_bytes());
        self.hasher.update(b"=");
        self.update_str(value)
    }

    /// Start a new section; keeps an empty section distinct from a missing one.
    pub fn section(&mut self, name: &str) -> &mut Self {
        self.hasher.update(b"[");
        self.hasher.update(name.as_bytes());
        self.hasher.update(b"]\0");
        self
    }

    /// Finalize as a hex string.
    pub fn finish(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}
