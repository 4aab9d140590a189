//! HMAC-SHA256 request signing.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use super::error::BinanceError;

type HmacSha256 = Hmac<Sha256>;

/// Signs query strings with the account secret.
#[derive(Clone)]
pub struct BinanceSigner {
    api_secret: String,
}

impl BinanceSigner {
    /// Create a signer for `api_secret`.
    pub fn new(api_secret: impl Into<String>) -> Self {
        Self {
            api_secret: api_secret.into(),
        }
    }

    /// Lowercase hex HMAC-SHA256 of `payload`.
    pub fn sign(&self, payload: &str) -> Result<String, BinanceError> {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .map_err(|e| BinanceError::Configuration(format!("invalid API secret: {e}")))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for BinanceSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceSigner").finish_non_exhaustive()
    }
}

/// Form-encode `(key, value)` pairs as `k1=v1&k2=v2`, preserving order.
///
/// Keys and values are percent-encoded, so a value can never add fields.
pub fn build_query_string<K: Serialize, V: Serialize>(
    params: &[(K, V)],
) -> Result<String, BinanceError> {
    serde_urlencoded::to_string(params).map_err(|e| BinanceError::Encoding(e.to_string()))
}
