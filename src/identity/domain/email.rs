//! Normalised e-mail address value object.

use super::EmailError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Pragmatic format check: local part, `@`, and a domain carrying a dotted
/// extension of at least two characters. Input is lower-cased beforehand.
#[expect(clippy::expect_used, reason = "the pattern is a compile-time constant")]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("e-mail pattern must compile")
});

/// Validated e-mail address, normalised to trimmed lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalises an e-mail address.
    ///
    /// Normalisation is idempotent: re-parsing an accepted address yields an
    /// equal value.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Required`] when the input is blank after
    /// trimming and [`EmailError::InvalidFormat`] when the normalised value
    /// does not look like `local@domain.tld`.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(EmailError::Required);
        }
        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(EmailError::InvalidFormat(normalized));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalised address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the local part, the substring before the last `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(local, _)| local)
    }

    /// Returns the domain, the substring after the last `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
