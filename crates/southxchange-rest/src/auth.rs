//! Authentication for SouthXchange private endpoints
//!
//! Implements the HMAC-SHA512 body signing the exchange requires: the raw
//! serialized JSON payload is signed with the account secret and the
//! lowercase hex tag is sent in a `Hash` header.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{RestError, RestResult};

type HmacSha512 = Hmac<Sha512>;

/// API credentials for authenticated requests
#[derive(Clone)]
pub struct Credentials {
    /// API key (public half)
    api_key: String,
    /// API secret used as the HMAC key
    api_secret: String,
}

impl Credentials {
    /// Create credentials from an API key and secret.
    ///
    /// Empty strings are accepted here; presence is enforced per call by the
    /// request executor, which refuses authenticated calls with an
    /// incomplete pair.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Create credentials from environment variables.
    ///
    /// Reads `SOUTHXCHANGE_API_KEY` and `SOUTHXCHANGE_API_SECRET`.
    pub fn from_env() -> RestResult<Self> {
        let api_key = std::env::var("SOUTHXCHANGE_API_KEY")
            .map_err(|_| RestError::EnvVar("SOUTHXCHANGE_API_KEY".to_string()))?;
        let api_secret = std::env::var("SOUTHXCHANGE_API_SECRET")
            .map_err(|_| RestError::EnvVar("SOUTHXCHANGE_API_SECRET".to_string()))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Both halves of the pair are non-empty
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }

    /// Sign a serialized request body.
    ///
    /// The tag is the lowercase hex encoding of HMAC-SHA512 over the raw
    /// bytes, keyed by the account secret.
    pub fn sign(&self, message: &[u8]) -> String {
        sign(self.api_secret.as_bytes(), message)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Compute the authentication tag for a request body.
///
/// Pure function of its inputs: identical secret and message always produce
/// the identical tag.
pub fn sign(secret: &[u8], message: &[u8]) -> String {
    let mut mac = HmacSha512::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Generate a nonce for an authenticated POST body.
///
/// Nanoseconds since the Unix epoch as a base-10 string. Strictly increasing
/// for sequential calls; concurrent POSTs under the same key can still
/// collide, which the upstream replay protection rejects.
pub(crate) fn nonce() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_nanos()
        .to_string()
}
