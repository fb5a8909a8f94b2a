//! Credential generation for drops.
//!
//! A drop is guarded by two tokens with deliberately different strength:
//! the [`DropId`] embedded in the share link (122 bits, unguessable, the
//! real barrier) and the short [`Password`] the recipient types in (the
//! second factor behind the link, not the sole one).

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of characters in a generated one-time password.
pub const PASSWORD_LEN: usize = 6;

/// Alphabet for generated passwords. Uppercase only; comparison is
/// case-insensitive so the recipient can type either case.
const PASSWORD_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Opaque identifier naming one pending drop.
///
/// Backed by a random UUIDv4, which carries enough entropy to serve as a
/// bearer token for reaching the password prompt. Never reused for the
/// lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DropId(Uuid);

impl DropId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DropId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A one-time password guarding a drop.
///
/// Immutable after creation and compared successfully exactly once.
/// `Debug` is redacted so passwords never end up in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Generate a fresh password from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let chars = (0..PASSWORD_LEN)
            .map(|_| {
                let idx = rng.random_range(0..PASSWORD_CHARSET.len());
                PASSWORD_CHARSET[idx] as char
            })
            .collect();
        Self(chars)
    }

    /// Check a submitted attempt against this password.
    ///
    /// Attempts are trimmed and compared case-insensitively; passwords are
    /// short human-typed secrets and leading whitespace or a lowercase
    /// entry should not burn the recipient's download.
    pub fn matches(&self, attempt: &str) -> bool {
        self.0.eq_ignore_ascii_case(attempt.trim())
    }

    /// The password text, for handing to the uploader exactly once.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
