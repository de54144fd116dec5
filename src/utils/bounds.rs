//! Bounds validation utilities

use crate::error::{Error, Result};
use crate::limits::MAX_TOKEN_LENGTH;

/// Reject token strings over the size limit before splitting them
pub(crate) fn validate_token_length(token: &str) -> Result<()> {
    if token.len() > MAX_TOKEN_LENGTH {
        return Err(Error::MalformedToken(format!(
            "Token too large: {} bytes (maximum: {} bytes)",
            token.len(),
            MAX_TOKEN_LENGTH
        )));
    }
    Ok(())
}

/// Apply clock skew to a timestamp with overflow protection
pub(crate) fn apply_clock_skew(timestamp: i64, skew_seconds: u64, add: bool) -> Result<i64> {
    let skew_i64 = i64::try_from(skew_seconds).map_err(|_| Error::TimestampOverflow)?;
    if add {
        timestamp.checked_add(skew_i64)
    } else {
        timestamp.checked_sub(skew_i64)
    }
    .ok_or(Error::TimestampOverflow)
}
