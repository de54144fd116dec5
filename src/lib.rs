//! # hsjwt - HMAC-Signed Bearer Tokens
//!
//! > Issue and verify compact JSON Web Tokens signed with a shared secret.
//!
//! **hsjwt** builds and checks tokens of the form `header.payload.signature`, where each
//! segment is unpadded Base64URL and the signature is an HMAC (HS256, HS384 or HS512) over
//! `header.payload`. The payload is any JSON value; the library does not interpret it unless
//! asked to.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//!
//! let token = hsjwt::issue(&json!({"role": "api_user"}), b"s3cr3t")?;
//!
//! let verification = hsjwt::verify(token.as_str(), b"s3cr3t")?;
//! assert!(verification.is_valid());
//! assert_eq!(verification.payload()["role"], "api_user");
//! # Ok::<(), hsjwt::Error>(())
//! ```
//!
//! ## Verification Outcome
//!
//! A token whose signature does not match is **not** an error. [`verify`] returns a
//! [`Verification`] carrying the decoded header and payload together with `valid == false`,
//! so callers can log or inspect rejected tokens. Errors are reserved for input that cannot be
//! processed at all:
//!
//! - [`Error::MalformedToken`]: not three non-empty segments, bad Base64URL, or bad JSON
//! - [`Error::EmptySecret`]: the secret has zero length
//! - [`Error::InvalidAlgorithm`]: an algorithm name outside HS256/HS384/HS512
//!
//! Use [`Verification::into_trusted`] to turn a mismatch into [`Error::SignatureInvalid`].
//!
//! ## Algorithm Selection
//!
//! The verifier never reads the algorithm from the token. The `alg` member of an incoming
//! header is untrusted and only reported back; the signature is always recomputed with the
//! algorithm the caller passes (HS256 by default). A token issued with HS256 and verified
//! with HS384 is simply invalid. This also rules out `"none"` tokens.
//!
//! ## Claims Validation
//!
//! Registered claims (`exp`, `nbf`, `iat`, `aud`, ...) are opt-in:
//!
//! ```
//! use hsjwt::{Authority, Claims, ClaimsValidation};
//!
//! let authority = Authority::new("s3cr3t")?
//!     .with_claims_validation(ClaimsValidation::new().require_audience("my-api").clock_skew(60));
//!
//! let token = authority.issue(&Claims::new().with_audience("my-api").expires_in(3600))?;
//! let claims: Claims = authority.authenticate(token.as_str())?;
//! # Ok::<(), hsjwt::Error>(())
//! ```
//!
//! ## Security
//!
//! Signatures are compared in constant time via the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate. Inputs are bounded
//! before decoding (64KB tokens, 8KB headers, 32KB payloads).
//!
//! ## References
//!
//! - [RFC 4648](https://datatracker.ietf.org/doc/html/rfc4648): Base64URL encoding
//! - [RFC 2104](https://datatracker.ietf.org/doc/html/rfc2104): HMAC
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)

// Core modules
pub mod error;
pub mod utils;

// Signing
pub mod algorithm;

// Tokens
pub mod header;
pub mod token;

// Claims and validation
pub mod authority;
pub mod claims;

pub(crate) mod limits;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use algorithm::{Algorithm, sign};
pub use authority::Authority;
pub use claims::{Claims, ClaimsValidation, StandardClaims};
pub use error::{Error, Result};
pub use header::TokenHeader;
pub use token::{
    Token, Verification, issue, issue_with, verify, verify_as, verify_as_with, verify_with,
};
pub use utils::base64url::{decode, encode};
