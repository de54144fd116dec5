//! Algorithm support for signing and verification
//!
//! Only the HMAC family is available. Verification always runs with the
//! algorithm chosen by the caller; the `alg` member of an incoming token's
//! header is never consulted to pick one.

pub mod hmac;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Algorithm identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// HMAC with SHA-256
    #[default]
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,
}

impl Algorithm {
    /// All supported algorithms
    pub const ALL: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

    /// Parse an algorithm name (case-sensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            _ => Err(Error::InvalidAlgorithm(s.into())),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Size of the raw signature in bytes
    pub const fn digest_len(&self) -> usize {
        match self {
            Algorithm::HS256 => 32,
            Algorithm::HS384 => 48,
            Algorithm::HS512 => 64,
        }
    }

    /// Compute the keyed hash of `message`
    pub fn sign(&self, message: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
        sign(message, secret, *self)
    }

    fn signer(&self) -> &'static dyn hmac::SigningAlgorithm {
        match self {
            Algorithm::HS256 => &hmac::HS256,
            Algorithm::HS384 => &hmac::HS384,
            Algorithm::HS512 => &hmac::HS512,
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::from_str(s)
    }
}

impl TryFrom<&str> for Algorithm {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Algorithm::from_str(s)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Compute the keyed hash of `message` under `secret`
///
/// The output is 32, 48 or 64 bytes for HS256, HS384 and HS512. An empty
/// secret is rejected before any hashing takes place.
pub fn sign(message: &[u8], secret: &[u8], algorithm: Algorithm) -> Result<Vec<u8>> {
    if secret.is_empty() {
        return Err(Error::EmptySecret);
    }
    algorithm.signer().sign(message, secret)
}

/// Check a Base64URL-encoded signature against the expected one for
/// `signing_input`, in constant time
pub(crate) fn signature_matches(
    signing_input: &str,
    signature_b64: &str,
    secret: &[u8],
    algorithm: Algorithm,
) -> Result<bool> {
    if secret.is_empty() {
        return Err(Error::EmptySecret);
    }
    algorithm
        .signer()
        .matches(signing_input.as_bytes(), signature_b64, secret)
}
