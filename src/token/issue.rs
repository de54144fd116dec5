use crate::algorithm::{Algorithm, sign};
use crate::error::{Error, Result};
use crate::header::TokenHeader;
use crate::limits::MAX_DECODED_PAYLOAD_SIZE;
use crate::token::Token;
use crate::utils::base64url;
use serde::Serialize;

/// Issue an HS256 token carrying `payload`
///
/// # Example
/// ```
/// let token = hsjwt::issue(&serde_json::json!({"role": "api_user"}), b"s3cr3t")?;
/// assert_eq!(token.as_str().matches('.').count(), 2);
/// # Ok::<(), hsjwt::Error>(())
/// ```
pub fn issue<P>(payload: &P, secret: &[u8]) -> Result<Token>
where
    P: Serialize + ?Sized,
{
    issue_with(payload, secret, Algorithm::default())
}

/// Issue a token carrying `payload`, signed with `algorithm`
///
/// Fails with [`Error::EmptySecret`] for an empty secret and with
/// [`Error::SerializationError`] when the payload cannot be written as JSON.
pub fn issue_with<P>(payload: &P, secret: &[u8], algorithm: Algorithm) -> Result<Token>
where
    P: Serialize + ?Sized,
{
    if secret.is_empty() {
        return Err(Error::EmptySecret);
    }

    let header_json = serde_json::to_vec(&TokenHeader::new(algorithm))
        .map_err(|e| Error::SerializationError(format!("Failed to serialize header: {e}")))?;
    let payload_json = serde_json::to_vec(payload)
        .map_err(|e| Error::SerializationError(format!("Failed to serialize payload: {e}")))?;

    // Larger payloads would be rejected on verification
    if payload_json.len() > MAX_DECODED_PAYLOAD_SIZE {
        return Err(Error::SerializationError(format!(
            "Payload too large: {} bytes (maximum: {} bytes)",
            payload_json.len(),
            MAX_DECODED_PAYLOAD_SIZE
        )));
    }

    let signing_input = format!(
        "{}.{}",
        base64url::encode(&header_json),
        base64url::encode(&payload_json)
    );
    let signature = sign(signing_input.as_bytes(), secret, algorithm)?;
    let token = Token::from_parts(signing_input, &base64url::encode(signature));

    tracing::debug!(
        algorithm = %algorithm,
        payload_bytes = payload_json.len(),
        token_bytes = token.as_str().len(),
        "issued token"
    );

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Serialize, Serializer};
    use serde_json::json;
    use std::collections::BTreeMap;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialize"))
        }
    }

    #[test]
    fn test_issue_layout() {
        let token = issue(&json!({"role": "api_user"}), b"s3cr3t").unwrap();
        let (header, payload, signature) = token.segments();

        assert_eq!(
            base64url::decode(header).unwrap(),
            br#"{"alg":"HS256","typ":"JWT"}"#
        );
        assert_eq!(base64url::decode(payload).unwrap(), br#"{"role":"api_user"}"#);
        assert_eq!(base64url::decode(signature).unwrap().len(), 32);
    }

    #[test]
    fn test_issue_signature_covers_signing_input() {
        for algorithm in Algorithm::ALL {
            let token = issue_with(&json!({"n": 1}), b"key", algorithm).unwrap();
            let expected = sign(token.signing_input().as_bytes(), b"key", algorithm).unwrap();
            assert_eq!(token.segments().2, base64url::encode(expected));
        }
    }

    #[test]
    fn test_issue_is_deterministic() {
        let first = issue_with(&json!({"sub": "a"}), b"key", Algorithm::HS384).unwrap();
        let second = issue_with(&json!({"sub": "a"}), b"key", Algorithm::HS384).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_issue_rejects_empty_secret() {
        assert!(matches!(
            issue(&json!({"role": "api_user"}), b""),
            Err(Error::EmptySecret)
        ));
    }

    #[test]
    fn test_issue_serialization_failure() {
        assert!(matches!(
            issue(&Unserializable, b"secret"),
            Err(Error::SerializationError(_))
        ));

        // JSON object keys must be strings
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "value");
        assert!(matches!(
            issue(&map, b"secret"),
            Err(Error::SerializationError(_))
        ));
    }

    #[test]
    fn test_issue_rejects_oversized_payload() {
        let payload = json!({ "blob": "x".repeat(MAX_DECODED_PAYLOAD_SIZE) });
        assert!(matches!(
            issue(&payload, b"secret"),
            Err(Error::SerializationError(_))
        ));
    }
}
