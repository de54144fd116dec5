//! Base64URL encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate using the
//! URL-safe alphabet (`-` and `_` in place of `+` and `/`) without padding.
//! Decoding is strict: padding, characters outside the URL-safe alphabet and
//! non-canonical trailing bits are all rejected, so every byte sequence has
//! exactly one encoded form.

use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode bytes to a Base64URL string (no padding, no line breaks)
pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode a Base64URL string to bytes
pub fn decode(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::MalformedToken(format!("Base64URL decode failed: {e}")))
}

/// Decode a Base64URL string to bytes with maximum size limit
pub(crate) fn decode_bounded(input: &str, max_size: usize) -> Result<Vec<u8>> {
    let result = decode(input)?;

    if result.len() > max_size {
        return Err(Error::MalformedToken(format!(
            "Decoded size exceeds limit: {} bytes (max: {})",
            result.len(),
            max_size
        )));
    }

    Ok(result)
}
