use crate::claims::StandardClaims;
use crate::error::{Error, Result};
use crate::limits::{MAX_CLOCK_SKEW_SECONDS, MAX_MAX_AGE_SECONDS};
use crate::utils::bounds::apply_clock_skew;
use std::time::{SystemTime, UNIX_EPOCH};

/// Configuration for claims validation
///
/// Temporal claims are checked only when present unless
/// [`require_expiration`](Self::require_expiration) is set.
#[derive(Debug, Clone)]
pub struct ClaimsValidation {
    validate_exp: bool,
    validate_nbf: bool,
    validate_iat: bool,
    require_exp: bool,
    clock_skew_seconds: u64,
    max_age_seconds: Option<u64>,
    required_audience: Option<String>,
    required_issuer: Option<String>,
}

impl Default for ClaimsValidation {
    fn default() -> Self {
        Self {
            validate_exp: true,
            validate_nbf: true,
            validate_iat: true,
            require_exp: false,
            clock_skew_seconds: 0,
            max_age_seconds: None,
            required_audience: None,
            required_issuer: None,
        }
    }
}

impl ClaimsValidation {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clock skew tolerance
    ///
    /// Values above 300 seconds are rejected during validation.
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew_seconds = seconds;
        self
    }

    /// Set maximum token age, measured from `iat`
    ///
    /// Values above one year are rejected during validation.
    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age_seconds = Some(seconds);
        self
    }

    /// Require a specific audience
    pub fn require_audience(mut self, audience: impl Into<String>) -> Self {
        self.required_audience = Some(audience.into());
        self
    }

    /// Require a specific issuer
    pub fn require_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.required_issuer = Some(issuer.into());
        self
    }

    /// Reject tokens without an `exp` claim
    pub fn require_expiration(mut self) -> Self {
        self.require_exp = true;
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.validate_nbf = false;
        self
    }

    /// Disable issued-at validation
    pub fn no_iat_validation(mut self) -> Self {
        self.validate_iat = false;
        self
    }

    /// Validate `claims` against the current time
    pub fn validate(&self, claims: &impl StandardClaims) -> Result<()> {
        validate_claims(claims, self)
    }
}

/// Validate claims according to configuration
pub fn validate_claims(claims: &impl StandardClaims, config: &ClaimsValidation) -> Result<()> {
    validate_claims_at(claims, config, current_timestamp()).inspect_err(|e| {
        tracing::debug!(error = %e, "claims validation failed");
    })
}

pub(crate) fn validate_claims_at(
    claims: &impl StandardClaims,
    config: &ClaimsValidation,
    now: i64,
) -> Result<()> {
    if config.clock_skew_seconds > MAX_CLOCK_SKEW_SECONDS {
        return Err(Error::ClockSkewTooLarge {
            value: config.clock_skew_seconds,
            max: MAX_CLOCK_SKEW_SECONDS,
        });
    }
    if let Some(max_age) = config.max_age_seconds {
        if max_age > MAX_MAX_AGE_SECONDS {
            return Err(Error::MaxAgeTooLarge {
                value: max_age,
                max: MAX_MAX_AGE_SECONDS,
            });
        }
    }

    let skew = config.clock_skew_seconds;

    if config.require_exp && claims.expiration().is_none() {
        return Err(Error::TokenMissingClaim("exp".into()));
    }

    if config.validate_exp {
        if let Some(exp) = claims.expiration() {
            let exp_with_skew = apply_clock_skew(exp, skew, true)?;
            if now > exp_with_skew {
                return Err(Error::TokenExpired {
                    expired_at: exp,
                    now,
                    skew,
                });
            }
        }
    }

    if config.validate_nbf {
        if let Some(nbf) = claims.not_before() {
            let nbf_with_skew = apply_clock_skew(nbf, skew, false)?;
            if now < nbf_with_skew {
                return Err(Error::TokenNotYetValid {
                    not_before: nbf,
                    now,
                    skew,
                });
            }
        }
    }

    if config.validate_iat {
        if let Some(iat) = claims.issued_at() {
            let now_with_skew = apply_clock_skew(now, skew, true)?;
            if iat > now_with_skew {
                return Err(Error::TokenIssuedInFuture {
                    issued_at: iat,
                    now,
                    skew,
                });
            }

            if let Some(max_age) = config.max_age_seconds {
                let oldest_accepted = iat
                    .checked_add_unsigned(max_age)
                    .ok_or(Error::TimestampOverflow)?;
                if now > oldest_accepted {
                    return Err(Error::TokenTooOld {
                        issued_at: iat,
                        now,
                        max_age,
                    });
                }
            }
        }
    }

    if let Some(required) = &config.required_issuer {
        match claims.issuer() {
            Some(iss) if iss == required => {}
            Some(iss) => {
                return Err(Error::TokenIssuerMismatch {
                    expected: required.clone(),
                    found: iss.into(),
                });
            }
            None => return Err(Error::TokenMissingClaim("iss".into())),
        }
    }

    if let Some(required_aud) = &config.required_audience {
        match claims.audience() {
            Some(aud) if aud == required_aud => {}
            Some(aud) => {
                return Err(Error::TokenAudienceMismatch {
                    expected: required_aud.clone(),
                    found: aud.into(),
                });
            }
            None => return Err(Error::TokenMissingClaim("aud".into())),
        }
    }

    Ok(())
}

/// Get current Unix timestamp
pub(crate) fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
}
