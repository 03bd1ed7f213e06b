//! Didactic password digest for user credentials.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of `login ":" password`.
///
/// The login doubles as a per-user salt. This is a teaching simplification,
/// not a security mechanism; a real deployment would use a dedicated
/// password-hashing scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Derives the digest for a login/password pair.
    #[must_use]
    pub fn derive(login: &str, password: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(login.as_bytes());
        hasher.update(b":");
        hasher.update(password.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Returns `true` when the candidate password reproduces this digest.
    #[must_use]
    pub fn verify(&self, login: &str, candidate: &str) -> bool {
        *self == Self::derive(login, candidate)
    }

    /// Returns the hex-encoded digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
