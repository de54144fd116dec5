use crate::error::{Error, Result};
use crate::header::TokenHeader;
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE};
use crate::utils::base64url;
use crate::utils::bounds::validate_token_length;
use serde::de::DeserializeOwned;

/// Split a token into exactly three non-empty segments
pub(crate) fn split_segments(token: &str) -> Result<[&str; 3]> {
    let mut parts = token.split('.');
    let header_b64 = parts.next().unwrap_or_default();
    let payload_b64 = parts
        .next()
        .ok_or_else(|| segment_count_error(token))?;
    let signature_b64 = parts
        .next()
        .ok_or_else(|| segment_count_error(token))?;
    if parts.next().is_some() {
        return Err(segment_count_error(token));
    }

    let segments = [header_b64, payload_b64, signature_b64];
    for (segment, name) in segments.iter().zip(["header", "payload", "signature"]) {
        if segment.is_empty() {
            return Err(Error::MalformedToken(format!("Empty {name} segment")));
        }
    }

    Ok(segments)
}

fn segment_count_error(token: &str) -> Error {
    Error::MalformedToken(format!(
        "expected three segments separated by '.', found {}",
        token.split('.').count()
    ))
}

/// A token split into its parts, with header and payload decoded
///
/// Nothing here has been checked against a secret yet.
pub(crate) struct ParsedToken<'a, P> {
    header_b64: &'a str,
    payload_b64: &'a str,
    signature_b64: &'a str,
    header: TokenHeader,
    payload: P,
}

impl<'a, P> ParsedToken<'a, P>
where
    P: DeserializeOwned,
{
    /// Parse a token string in format "header.payload.signature"
    pub(crate) fn parse(token: &'a str) -> Result<Self> {
        validate_token_length(token)?;

        let [header_b64, payload_b64, signature_b64] = split_segments(token)?;

        let header_json = base64url::decode_bounded(header_b64, MAX_DECODED_HEADER_SIZE)?;
        let header: TokenHeader = serde_json::from_slice(&header_json)
            .map_err(|e| Error::MalformedToken(format!("Failed to parse header: {e}")))?;

        let payload_json = base64url::decode_bounded(payload_b64, MAX_DECODED_PAYLOAD_SIZE)?;
        let payload: P = serde_json::from_slice(&payload_json)
            .map_err(|e| Error::MalformedToken(format!("Failed to parse payload: {e}")))?;

        Ok(Self {
            header_b64,
            payload_b64,
            signature_b64,
            header,
            payload,
        })
    }
}

impl<P> ParsedToken<'_, P> {
    /// Get the signing input (header.payload)
    pub(crate) fn signing_input(&self) -> String {
        format!("{}.{}", self.header_b64, self.payload_b64)
    }

    /// Get the encoded signature
    pub(crate) fn signature(&self) -> &str {
        self.signature_b64
    }

    /// Take the decoded header and payload
    pub(crate) fn into_parts(self) -> (TokenHeader, P) {
        (self.header, self.payload)
    }
}
