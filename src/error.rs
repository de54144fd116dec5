//! Errors for hsjwt

use thiserror::Error;

/// hsjwt Errors
///
/// `verify` only ever fails with [`Error::InvalidAlgorithm`],
/// [`Error::MalformedToken`] or [`Error::EmptySecret`]. A well-formed token
/// with a wrong signature is not an error; it is a successful verification
/// with `valid == false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Core Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported (expected HS256, HS384 or HS512)")]
    InvalidAlgorithm(String),

    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Secret must not be empty")]
    EmptySecret,

    #[error("Serialization failed: {0}")]
    SerializationError(String),

    // ============================================================================
    // Trust Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    // ============================================================================
    // Claims Errors
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now}, skew: {skew}s)")]
    TokenExpired {
        expired_at: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token not valid until {not_before} (now: {now}, skew: {skew}s)")]
    TokenNotYetValid {
        not_before: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token issued in future at {issued_at} (now: {now}, skew: {skew}s)")]
    TokenIssuedInFuture { issued_at: i64, now: i64, skew: u64 },

    #[error("Token too old: issued at {issued_at}, max age {max_age}s (now: {now})")]
    TokenTooOld {
        issued_at: i64,
        now: i64,
        max_age: u64,
    },

    #[error("Token audience mismatch: expected '{expected}', found '{found}'")]
    TokenAudienceMismatch { expected: String, found: String },

    #[error("Token issuer mismatch: expected '{expected}', found '{found}'")]
    TokenIssuerMismatch { expected: String, found: String },

    #[error("Required token claim '{0}' is missing")]
    TokenMissingClaim(String),

    #[error("Integer overflow in timestamp arithmetic")]
    TimestampOverflow,

    #[error("Clock skew too large: {value} seconds (maximum: {max} seconds)")]
    ClockSkewTooLarge { value: u64, max: u64 },

    #[error("Max age too large: {value} seconds (maximum: {max} seconds)")]
    MaxAgeTooLarge { value: u64, max: u64 },
}

impl Error {
    /// Whether the input could not be parsed at all (as opposed to parsing
    /// fine and failing a later check)
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedToken(_))
    }
}

/// Result type alias for hsjwt operations
pub type Result<T> = std::result::Result<T, Error>;
