use crate::error::{Error, Result};
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::Hmac;
use hmac::digest::{KeyInit, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// Core trait implemented by every keyed-hash signing algorithm
pub trait SigningAlgorithm: Send + Sync {
    /// The algorithm identifier (e.g., "HS256")
    fn name(&self) -> &'static str;

    /// Compute the raw signature of `message` under `secret`
    fn sign(&self, message: &[u8], secret: &[u8]) -> Result<Vec<u8>>;

    /// Compare a Base64URL-encoded signature against the expected one
    ///
    /// The comparison runs over the encoded text in constant time.
    fn matches(&self, message: &[u8], signature_b64: &str, secret: &[u8]) -> Result<bool> {
        let expected = base64url::encode(self.sign(message, secret)?);
        Ok(constant_time_eq(
            expected.as_bytes(),
            signature_b64.as_bytes(),
        ))
    }
}

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

/// HS384 algorithm (HMAC with SHA-384)
pub struct HS384;

/// HS512 algorithm (HMAC with SHA-512)
pub struct HS512;

impl SigningAlgorithm for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn sign(&self, message: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
        compute_mac::<Hmac<Sha256>>(self.name(), message, secret)
    }
}

impl SigningAlgorithm for HS384 {
    fn name(&self) -> &'static str {
        "HS384"
    }

    fn sign(&self, message: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
        compute_mac::<Hmac<Sha384>>(self.name(), message, secret)
    }
}

impl SigningAlgorithm for HS512 {
    fn name(&self) -> &'static str {
        "HS512"
    }

    fn sign(&self, message: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
        compute_mac::<Hmac<Sha512>>(self.name(), message, secret)
    }
}

fn compute_mac<M>(name: &str, message: &[u8], secret: &[u8]) -> Result<Vec<u8>>
where
    M: Mac + KeyInit,
{
    // HMAC accepts keys of any length; only an empty one is refused upstream
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|e| Error::InvalidAlgorithm(format!("{name}: {e}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
