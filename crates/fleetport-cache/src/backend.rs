//! Cache backend trait and error type.

use async_trait::async_trait;
use std::time::Duration;

/// Errors surfaced by a cache backend.
///
/// These never cross the [`crate::CacheLayer`] boundary; the layer logs them
/// and reports a miss instead.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Transport-level failure reaching the cache service.
    #[error("Cache transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The cache service answered with a non-success status.
    #[error("Cache service returned status {0}")]
    UnexpectedStatus(u16),

    /// A stored payload could not be encoded or decoded.
    #[error("Cache codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Raw string-valued cache with per-entry TTL.
///
/// Implementations must treat an absent key and an expired key identically
/// (both are `Ok(None)`). A `set` on an existing key overwrites the value
/// and resets its expiry.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Fetch the value stored under `key`, if present and unexpired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key` with the given time-to-live.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Remove `key` if present. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
