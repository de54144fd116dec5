//! Edge case tests for token parsing and verification
//!
//! Structural problems must surface as `MalformedToken`, never as a panic and
//! never as a token that verifies.

use hsjwt::*;
use serde_json::{Value, json};

fn create_valid_token() -> String {
    issue(&json!({"iss": "test", "sub": "user", "exp": 9999999999u64}), b"secret")
        .unwrap()
        .into_string()
}

fn assert_malformed(token: &str) {
    let result = verify(token, b"secret");
    assert!(
        matches!(result, Err(Error::MalformedToken(_))),
        "expected MalformedToken for {token:?}, got {result:?}"
    );
}

// ============================================================================
// Token Format Edge Cases
// ============================================================================

#[test]
fn test_empty_token() {
    assert_malformed("");
}

#[test]
fn test_single_dot() {
    assert_malformed(".");
}

#[test]
fn test_two_parts() {
    assert_malformed("a.b");
    assert_malformed("header.payload");
}

#[test]
fn test_four_parts() {
    assert_malformed("a.b.c.d");
    assert_malformed("header.payload.signature.extra");
}

#[test]
fn test_empty_segments() {
    let token = Token::parse(create_valid_token()).unwrap();
    let (header, payload, signature) = token.segments();

    assert_malformed(&format!(".{payload}.{signature}"));
    assert_malformed(&format!("{header}..{signature}"));
    assert_malformed(&format!("{header}.{payload}."));
    assert_malformed("..");
}

#[test]
fn test_leading_and_trailing_dots() {
    let token = create_valid_token();
    assert_malformed(&format!(".{token}"));
    assert_malformed(&format!("{token}."));
}

// ============================================================================
// Encoding Edge Cases
// ============================================================================

#[test]
fn test_standard_base64_characters_rejected() {
    let payload_b64 = encode("{}");
    assert_malformed(&format!("ab+c.{payload_b64}.sig"));
    assert_malformed(&format!("ab/c.{payload_b64}.sig"));
}

#[test]
fn test_padded_segment_rejected() {
    let header = format!("{}=", encode(r#"{"alg":"HS256","typ":"JWT"}"#));
    let token = format!("{header}.{}.{}", encode("{}"), encode("sig"));
    assert_malformed(&token);
}

#[test]
fn test_whitespace_rejected() {
    let token = create_valid_token();
    assert_malformed(&format!(" {token}"));
    assert_malformed(&format!("\t{token}"));
}

#[test]
fn test_header_not_json() {
    let token = format!("{}.{}.{}", encode("not json"), encode("{}"), encode("sig"));
    assert_malformed(&token);
}

#[test]
fn test_header_without_alg() {
    let token = format!(
        "{}.{}.{}",
        encode(r#"{"typ":"JWT"}"#),
        encode("{}"),
        encode("sig")
    );
    assert_malformed(&token);
}

#[test]
fn test_payload_not_json() {
    let token = format!(
        "{}.{}.{}",
        encode(r#"{"alg":"HS256"}"#),
        encode("definitely not json"),
        encode("sig")
    );
    assert_malformed(&token);
}

#[test]
fn test_payload_non_utf8() {
    let token = format!(
        "{}.{}.{}",
        encode(r#"{"alg":"HS256"}"#),
        encode([0xff, 0xfe, 0xfd]),
        encode("sig")
    );
    assert_malformed(&token);
}

#[test]
fn test_signature_not_checked_for_encoding() {
    // The signature segment is only compared, never decoded
    let token = format!(
        "{}.{}.{}",
        encode(r#"{"alg":"HS256"}"#),
        encode("{}"),
        "this-is-not-a-real-signature"
    );
    let verification = verify(&token, b"secret").unwrap();
    assert!(!verification.is_valid());
}

// ============================================================================
// Payload Shapes
// ============================================================================

#[test]
fn test_any_json_payload() {
    for payload in [
        json!({}),
        json!([]),
        json!("text"),
        json!(42),
        json!(null),
        json!({"nested": {"deep": [1, 2, {"x": true}]}}),
        json!({"unicode": "héllo wörld ✓"}),
    ] {
        let token = issue(&payload, b"secret").unwrap();
        let verification = verify(token.as_str(), b"secret").unwrap();
        assert!(verification.is_valid());
        assert_eq!(verification.payload(), &payload);
    }
}

#[test]
fn test_large_payload_within_limits() {
    let payload = json!({ "data": "x".repeat(16 * 1024) });
    let token = issue(&payload, b"secret").unwrap();
    assert!(verify(token.as_str(), b"secret").unwrap().is_valid());
}

#[test]
fn test_oversized_token_rejected() {
    let huge = "a".repeat(70 * 1024);
    assert_malformed(&format!("{huge}.{huge}.{huge}"));
}

#[test]
fn test_oversized_payload_rejected() {
    let payload = encode(format!(r#"{{"data":"{}"}}"#, "x".repeat(40 * 1024)));
    let token = format!("{}.{payload}.{}", encode(r#"{"alg":"HS256"}"#), encode("sig"));
    assert_malformed(&token);
}

// ============================================================================
// Secret Edge Cases
// ============================================================================

#[test]
fn test_empty_secret() {
    let token = create_valid_token();
    assert!(matches!(verify(&token, b""), Err(Error::EmptySecret)));
    assert!(matches!(issue(&json!({}), b""), Err(Error::EmptySecret)));
    assert!(matches!(
        sign(b"message", b"", Algorithm::HS256),
        Err(Error::EmptySecret)
    ));
}

#[test]
fn test_empty_secret_checked_before_parsing() {
    assert!(matches!(verify("a.b", b""), Err(Error::EmptySecret)));
}

#[test]
fn test_long_secret() {
    // Longer than the hash block size, so HMAC hashes the key first
    let secret = vec![0x42u8; 1024];
    let token = issue_with(&json!({"k": "v"}), &secret, Algorithm::HS512).unwrap();
    assert!(verify_with(token.as_str(), &secret, Algorithm::HS512).unwrap().is_valid());
}

#[test]
fn test_binary_secret() {
    let secret = [0u8, 255, 1, 254, 7];
    let token = issue(&json!({"k": "v"}), &secret).unwrap();
    assert!(verify(token.as_str(), &secret).unwrap().is_valid());
    assert!(!verify(token.as_str(), &secret[..4]).unwrap().is_valid());
}

#[test]
fn test_payload_returned_with_wrong_secret() {
    let token = create_valid_token();
    let verification = verify(&token, b"wrong-secret").unwrap();
    assert!(!verification.is_valid());
    assert_eq!(verification.payload()["sub"], Value::from("user"));
}
