//! Size limit constants for input validation

/// Maximum length for a token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for decoded header JSON (8KB)
/// Headers are `{"alg":..,"typ":..}` in practice, but we allow reasonable margin
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded payload JSON (32KB)
/// Keeps the encoded payload well inside `MAX_TOKEN_LENGTH`
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 32 * 1024;

// ============================================================================
// Validation bounds
// ============================================================================

/// Maximum clock skew tolerance (300 seconds = 5 minutes)
pub(crate) const MAX_CLOCK_SKEW_SECONDS: u64 = 300;

/// Maximum token age (1 year = 31,536,000 seconds)
pub(crate) const MAX_MAX_AGE_SECONDS: u64 = 86400 * 365;
