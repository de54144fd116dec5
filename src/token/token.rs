//! The issued token value

use crate::error::{Error, Result};
use crate::token::parsed::split_segments;
use serde::{Deserialize, Serialize};

/// An issued bearer token: `header.payload.signature`
///
/// A `Token` is immutable and always has exactly three non-empty segments
/// drawn from the Base64URL alphabet. Holding a `Token` says nothing about
/// its signature; use [`verify`](crate::verify) for that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Assemble from a signing input and its encoded signature (internal use)
    pub(crate) fn from_parts(signing_input: String, signature_b64: &str) -> Self {
        let mut token = signing_input;
        token.reserve(signature_b64.len() + 1);
        token.push('.');
        token.push_str(signature_b64);
        Self(token)
    }

    /// Check the shape of a token string and wrap it
    ///
    /// Only the structure is checked (three non-empty segments, URL-safe
    /// characters); nothing is decoded.
    pub fn parse(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let segments = split_segments(&token)?;
        for segment in segments {
            if let Some(c) = segment
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
            {
                return Err(Error::MalformedToken(format!(
                    "Invalid character in token: {c:?}"
                )));
            }
        }
        Ok(Self(token))
    }

    /// The token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the token text
    pub fn into_string(self) -> String {
        self.0
    }

    /// The encoded header, payload and signature segments
    pub fn segments(&self) -> (&str, &str, &str) {
        let mut parts = self.0.splitn(3, '.');
        let header = parts.next().unwrap_or_default();
        let payload = parts.next().unwrap_or_default();
        let signature = parts.next().unwrap_or_default();
        (header, payload, signature)
    }

    /// The exact text the signature was computed over (`header.payload`)
    pub fn signing_input(&self) -> &str {
        self.0
            .rfind('.')
            .map_or(self.0.as_str(), |index| &self.0[..index])
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Token::parse(s)
    }
}

impl TryFrom<String> for Token {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Token::parse(s)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}
