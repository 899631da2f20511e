//! The advisory cache layer.
//!
//! Wraps a [`CacheBackend`] with typed JSON serialization and the portal's
//! failure policy: any backend or codec error is logged at `warn` and
//! reported as a miss. Callers never branch on cache health.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::CacheBackend;

/// Default time-to-live for cached entries.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Typed, failure-absorbing facade over a cache backend.
#[derive(Clone)]
pub struct CacheLayer {
    backend: Arc<dyn CacheBackend>,
}

impl CacheLayer {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    /// Read-through lookup. Returns `None` on absence, expiry, backend
    /// failure, or a payload that no longer decodes as `T`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key).await {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Cache read failed, treating as miss");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Cached payload failed to decode, treating as miss");
                None
            }
        }
    }

    /// Best-effort write. The entry overwrites any previous value under the
    /// key and expires after `ttl`.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to encode cache payload, skipping write");
                return;
            }
        };
        if let Err(e) = self.backend.set(key, &payload, ttl).await {
            tracing::warn!(key = %key, error = %e, "Cache write failed, continuing without cache");
        }
    }

    /// Best-effort removal of a key.
    pub async fn invalidate(&self, key: &str) {
        if let Err(e) = self.backend.delete(key).await {
            tracing::warn!(key = %key, error = %e, "Cache invalidation failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CacheError;
    use crate::memory::MemoryCacheBackend;
    use async_trait::async_trait;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        names: Vec<String>,
    }

    /// Backend in which every operation fails.
    struct BrokenBackend;

    #[async_trait]
    impl CacheBackend for BrokenBackend {
        async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::UnexpectedStatus(503))
        }

        async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
            Err(CacheError::UnexpectedStatus(503))
        }

        async fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::UnexpectedStatus(503))
        }
    }

    #[tokio::test]
    async fn round_trips_typed_values() {
        let layer = CacheLayer::new(Arc::new(MemoryCacheBackend::new()));
        let snapshot = Snapshot {
            names: vec!["View Dashboard".to_string(), "View Profile".to_string()],
        };

        layer.set("caps", &snapshot, DEFAULT_TTL).await;
        let loaded: Option<Snapshot> = layer.get("caps").await;
        assert_eq!(loaded, Some(snapshot));
    }

    #[tokio::test]
    async fn miss_on_absent_key() {
        let layer = CacheLayer::new(Arc::new(MemoryCacheBackend::new()));
        let loaded: Option<Snapshot> = layer.get("nothing").await;
        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn backend_failure_degrades_to_miss() {
        let layer = CacheLayer::new(Arc::new(BrokenBackend));
        let loaded: Option<Snapshot> = layer.get("caps").await;
        assert_eq!(loaded, None);

        // Writes and invalidations are absorbed too.
        let snapshot = Snapshot { names: vec![] };
        layer.set("caps", &snapshot, DEFAULT_TTL).await;
        layer.invalidate("caps").await;
    }

    #[tokio::test]
    async fn undecodable_payload_is_a_miss() {
        let backend = Arc::new(MemoryCacheBackend::new());
        backend
            .set("caps", "not json at all", DEFAULT_TTL)
            .await
            .unwrap();

        let layer = CacheLayer::new(backend);
        let loaded: Option<Snapshot> = layer.get("caps").await;
        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn invalidate_removes_entry() {
        let layer = CacheLayer::new(Arc::new(MemoryCacheBackend::new()));
        layer.set("k", &1u32, DEFAULT_TTL).await;
        layer.invalidate("k").await;
        let loaded: Option<u32> = layer.get("k").await;
        assert_eq!(loaded, None);
    }
}
