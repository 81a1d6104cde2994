//! Token cache seam.

use async_trait::async_trait;
use thiserror::Error;

/// The cache backend could not be reached. Distinct from a missing key: a
/// missing key means the token is not live, while this error routes the
/// resolver into the offline signature-decode fallback.
#[derive(Debug, Error)]
#[error("token store unavailable: {0}")]
pub struct TokenStoreError(pub String);

/// Read access to the session cache.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Fetch the serialized session payload for `key`. `Ok(None)` means the
    /// key is absent (token not recognized as live).
    async fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError>;
}
