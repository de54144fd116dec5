use crate::algorithm::{Algorithm, signature_matches};
use crate::claims::{ClaimsValidation, StandardClaims};
use crate::error::{Error, Result};
use crate::header::TokenHeader;
use crate::token::parsed::ParsedToken;
use serde::de::DeserializeOwned;

/// Outcome of checking a token against a secret
///
/// The decoded header and payload are returned whether or not the signature
/// matched, so that callers can inspect rejected tokens. A payload is only
/// trustworthy when [`is_valid`](Self::is_valid) is `true`; prefer
/// [`trusted_payload`](Self::trusted_payload) or
/// [`into_trusted`](Self::into_trusted) to get at it.
#[derive(Debug, Clone, PartialEq)]
pub struct Verification<P = serde_json::Value> {
    header: TokenHeader,
    payload: P,
    algorithm: Algorithm,
    valid: bool,
}

impl<P> Verification<P> {
    /// Get the decoded (untrusted) header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the decoded payload, whether or not the signature matched
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Whether the signature matched
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The algorithm the signature was checked with
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Whether the header declares the algorithm used for verification
    ///
    /// Diagnostic only. The declared algorithm never affects the verdict.
    pub fn header_algorithm_matches(&self) -> bool {
        self.header.algorithm == self.algorithm.as_str()
    }

    /// The payload, only if the signature matched
    pub fn trusted_payload(&self) -> Option<&P> {
        self.valid.then_some(&self.payload)
    }

    /// Consume into the payload, failing with [`Error::SignatureInvalid`]
    /// if the signature did not match
    pub fn into_trusted(self) -> Result<P> {
        if self.valid {
            Ok(self.payload)
        } else {
            Err(Error::SignatureInvalid)
        }
    }

    /// Consume into `(header, payload, valid)`
    pub fn into_parts(self) -> (TokenHeader, P, bool) {
        (self.header, self.payload, self.valid)
    }
}

impl<P> Verification<P>
where
    P: StandardClaims,
{
    /// Require a matching signature, then validate the registered claims
    pub fn into_validated(self, config: &ClaimsValidation) -> Result<P> {
        let payload = self.into_trusted()?;
        config.validate(&payload)?;
        Ok(payload)
    }
}

/// Verify an HS256 token, decoding the payload as JSON
///
/// # Example
/// ```
/// let token = hsjwt::issue(&serde_json::json!({"role": "api_user"}), b"s3cr3t")?;
///
/// let verification = hsjwt::verify(token.as_str(), b"s3cr3t")?;
/// assert!(verification.is_valid());
///
/// let verification = hsjwt::verify(token.as_str(), b"wrong-secret")?;
/// assert!(!verification.is_valid());
/// assert_eq!(verification.payload()["role"], "api_user");
/// # Ok::<(), hsjwt::Error>(())
/// ```
pub fn verify(token: &str, secret: &[u8]) -> Result<Verification> {
    verify_as_with(token, secret, Algorithm::default())
}

/// Verify a token with `algorithm`, decoding the payload as JSON
pub fn verify_with(token: &str, secret: &[u8], algorithm: Algorithm) -> Result<Verification> {
    verify_as_with(token, secret, algorithm)
}

/// Verify an HS256 token, decoding the payload into `P`
pub fn verify_as<P>(token: &str, secret: &[u8]) -> Result<Verification<P>>
where
    P: DeserializeOwned,
{
    verify_as_with(token, secret, Algorithm::default())
}

/// Verify a token with `algorithm`, decoding the payload into `P`
///
/// Errors are reserved for input that cannot be processed at all: an empty
/// secret, or a token that is not three Base64URL-encoded JSON segments (a
/// payload that does not fit `P` counts as malformed). A well-formed token
/// whose signature does not match yields `Ok` with `is_valid() == false`.
///
/// The header's `alg` is ignored; the signature is always recomputed with
/// `algorithm`.
pub fn verify_as_with<P>(
    token: &str,
    secret: &[u8],
    algorithm: Algorithm,
) -> Result<Verification<P>>
where
    P: DeserializeOwned,
{
    if secret.is_empty() {
        return Err(Error::EmptySecret);
    }

    let parsed = ParsedToken::<P>::parse(token).inspect_err(|e| {
        tracing::debug!(error = %e, "rejected malformed token");
    })?;

    let valid = signature_matches(&parsed.signing_input(), parsed.signature(), secret, algorithm)?;
    let (header, payload) = parsed.into_parts();

    tracing::debug!(
        algorithm = %algorithm,
        declared_algorithm = %header.algorithm,
        valid,
        "verified token"
    );

    Ok(Verification {
        header,
        payload,
        algorithm,
        valid,
    })
}
