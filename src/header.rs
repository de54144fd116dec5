use crate::algorithm::Algorithm;
use serde::{Deserialize, Serialize};

/// Token type marker written into every issued header
pub(crate) const TOKEN_TYPE: &str = "JWT";

/// Token header
///
/// Issued headers always serialize to the compact form
/// `{"alg":"HS256","typ":"JWT"}`. Headers decoded from incoming tokens are
/// untrusted: `alg` is kept as raw text and never selects the verification
/// algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Algorithm the token claims to be signed with
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Key ID
    #[serde(rename = "kid", default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

impl TokenHeader {
    /// Header for a token issued with `algorithm`
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm: algorithm.as_str().into(),
            token_type: Some(TOKEN_TYPE.into()),
            key_id: None,
        }
    }

    /// Get algorithm as string
    pub fn algorithm_str(&self) -> &str {
        &self.algorithm
    }

    /// Parse the declared algorithm
    ///
    /// Diagnostic only; fails for anything outside HS256/HS384/HS512.
    pub fn declared_algorithm(&self) -> crate::Result<Algorithm> {
        Algorithm::from_str(&self.algorithm)
    }

    /// Get key ID if present
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}
