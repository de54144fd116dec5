//! A secret and the settings it is used with

use crate::algorithm::Algorithm;
use crate::claims::{ClaimsValidation, StandardClaims};
use crate::error::{Error, Result};
use crate::token::{Token, Verification, issue_with, verify_as_with};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use zeroize::Zeroizing;

/// Issues and verifies tokens for one shared secret
///
/// The secret is wiped from memory when the `Authority` is dropped and never
/// shows up in `Debug` output.
///
/// # Example
/// ```
/// use hsjwt::{Algorithm, Authority, Claims};
///
/// let authority = Authority::new(b"s3cr3t".to_vec())?.with_algorithm(Algorithm::HS384);
///
/// let token = authority.issue(&Claims::new().with_subject("user-42").expires_in(60))?;
/// let claims: Claims = authority.authenticate(token.as_str())?;
/// assert_eq!(claims.subject.as_deref(), Some("user-42"));
/// # Ok::<(), hsjwt::Error>(())
/// ```
#[derive(Clone)]
pub struct Authority {
    secret: Zeroizing<Vec<u8>>,
    algorithm: Algorithm,
    validation: ClaimsValidation,
}

impl Authority {
    /// Create an authority using HS256 and default claims validation
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self> {
        let secret = Zeroizing::new(secret.into());
        if secret.is_empty() {
            return Err(Error::EmptySecret);
        }
        Ok(Self {
            secret,
            algorithm: Algorithm::default(),
            validation: ClaimsValidation::default(),
        })
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Claims validation applied by [`authenticate`](Self::authenticate)
    pub fn with_claims_validation(mut self, validation: ClaimsValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn issue<P>(&self, payload: &P) -> Result<Token>
    where
        P: Serialize + ?Sized,
    {
        issue_with(payload, &self.secret, self.algorithm)
    }

    pub fn verify(&self, token: &str) -> Result<Verification> {
        verify_as_with(token, &self.secret, self.algorithm)
    }

    pub fn verify_as<P>(&self, token: &str) -> Result<Verification<P>>
    where
        P: DeserializeOwned,
    {
        verify_as_with(token, &self.secret, self.algorithm)
    }

    /// Verify the signature and validate the registered claims
    ///
    /// Unlike [`verify`](Self::verify), a signature mismatch is reported as
    /// [`Error::SignatureInvalid`].
    pub fn authenticate<P>(&self, token: &str) -> Result<P>
    where
        P: DeserializeOwned + StandardClaims,
    {
        self.verify_as::<P>(token)?.into_validated(&self.validation)
    }
}

impl fmt::Debug for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authority")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("validation", &self.validation)
            .finish()
    }
}
