//! Registered claims and their validation
//!
//! Payloads are opaque to the signing core. This module is an opt-in layer on
//! top of it: [`Claims`] is a ready-made payload type carrying the RFC 7519
//! registered claims, and [`ClaimsValidation`] checks them once a signature
//! has been found valid.

mod validator;

pub use validator::{ClaimsValidation, validate_claims};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `StandardClaims` trait exposes the registered claims of a payload.
///
/// Implement it for your own payload types to run them through
/// [`ClaimsValidation`].
pub trait StandardClaims {
    /// Issuer (iss) - identifies the principal that issued the token
    fn issuer(&self) -> Option<&str>;
    /// Subject (sub) - identifies the principal that is the subject of the token
    fn subject(&self) -> Option<&str>;
    /// Audience (aud) - identifies the recipients that the token is intended for
    fn audience(&self) -> Option<&str>;
    /// Expiration Time (exp) - seconds since Unix epoch
    fn expiration(&self) -> Option<i64>;
    /// Not Before (nbf) - the token MUST NOT be accepted before this time
    fn not_before(&self) -> Option<i64>;
    /// Issued At (iat) - the time at which the token was issued
    fn issued_at(&self) -> Option<i64>;
    /// Token ID (jti) - a unique identifier for the token
    fn jwt_id(&self) -> Option<&str>;
}

/// Registered claims plus any additional members
///
/// Unknown members (such as `role`) are kept in [`extra`](Self::extra) and
/// written back out when the claims are issued.
///
/// # Example
/// ```
/// use hsjwt::Claims;
///
/// let claims = Claims::new()
///     .with_subject("user-42")
///     .with_claim("role", "api_user")
///     .expires_in(3600);
///
/// assert_eq!(claims.get("role").and_then(|v| v.as_str()), Some("api_user"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "iss", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    #[serde(rename = "sub", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Single-valued audience
    #[serde(rename = "aud", default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    #[serde(rename = "exp", default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,

    #[serde(rename = "nbf", default, skip_serializing_if = "Option::is_none")]
    pub not_before: Option<i64>,

    #[serde(rename = "iat", default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,

    #[serde(rename = "jti", default, skip_serializing_if = "Option::is_none")]
    pub jwt_id: Option<String>,

    /// Members other than the registered claims
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Empty claims
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_jwt_id(mut self, jwt_id: impl Into<String>) -> Self {
        self.jwt_id = Some(jwt_id.into());
        self
    }

    pub fn with_not_before(mut self, timestamp: i64) -> Self {
        self.not_before = Some(timestamp);
        self
    }

    pub fn with_expiration(mut self, timestamp: i64) -> Self {
        self.expiration = Some(timestamp);
        self
    }

    /// Stamp `iat` with the current time and set `exp` that many seconds later
    pub fn expires_in(mut self, seconds: u64) -> Self {
        let now = validator::current_timestamp();
        self.issued_at = Some(now);
        self.expiration = Some(now.saturating_add_unsigned(seconds));
        self
    }

    /// Add a non-registered member
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Look up a non-registered member
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

impl StandardClaims for Claims {
    fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    fn audience(&self) -> Option<&str> {
        self.audience.as_deref()
    }

    fn expiration(&self) -> Option<i64> {
        self.expiration
    }

    fn not_before(&self) -> Option<i64> {
        self.not_before
    }

    fn issued_at(&self) -> Option<i64> {
        self.issued_at
    }

    fn jwt_id(&self) -> Option<&str> {
        self.jwt_id.as_deref()
    }
}
