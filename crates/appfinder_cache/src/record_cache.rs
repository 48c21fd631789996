//! Catalog record cache implementation.

use crate::RecordCacheConfig;
use appfinder_core::{AppId, CatalogRecord};
use appfinder_error::{CacheError, CacheErrorKind, CacheResult};
use appfinder_interface::{CacheBackend, RecordStore};
use async_trait::async_trait;

/// Cache for catalog records.
///
/// Records are stored as JSON under `<prefix>:<id>` with a fixed TTL. A read
/// that decodes successfully resets the TTL to the full window; a value that
/// fails to decode is reported as a miss and left untouched.
///
/// # Example
///
/// ```
/// use appfinder_cache::{MemoryBackend, RecordCache, RecordCacheConfig};
/// use appfinder_core::{AppId, CatalogRecord};
/// use appfinder_interface::RecordStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let cache = RecordCache::new(MemoryBackend::new(), RecordCacheConfig::default());
/// let record = CatalogRecord::new(AppId::new(42), "Chess");
///
/// cache.put(&[record.clone()]).await;
///
/// assert_eq!(cache.key(AppId::new(42)), "app_info:42");
/// assert_eq!(cache.get(AppId::new(42)).await, Some(record));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct RecordCache<B> {
    config: RecordCacheConfig,
    backend: B,
}

impl<B: CacheBackend> RecordCache<B> {
    /// Create a new record cache over a backend.
    pub fn new(backend: B, config: RecordCacheConfig) -> Self {
        tracing::debug!(
            key_prefix = %config.key_prefix(),
            ttl_secs = config.ttl_secs(),
            "Creating new RecordCache"
        );
        Self { config, backend }
    }

    /// Namespaced key for an identifier.
    pub fn key(&self, id: AppId) -> String {
        format!("{}:{}", self.config.key_prefix(), id)
    }

    /// Cache configuration.
    pub fn config(&self) -> &RecordCacheConfig {
        &self.config
    }

    /// Underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Verify the backend is reachable.
    pub async fn ping(&self) -> CacheResult<()> {
        self.backend.ping().await
    }

    async fn store_one(&self, record: &CatalogRecord) -> CacheResult<()> {
        let value = serde_json::to_string(record)
            .map_err(|e| CacheError::new(CacheErrorKind::Serialization(e.to_string())))?;
        self.backend
            .set_with_ttl(&self.key(*record.id()), &value, self.config.ttl())
            .await
    }
}

fn decode(value: &str) -> CacheResult<CatalogRecord> {
    serde_json::from_str(value)
        .map_err(|e| CacheError::new(CacheErrorKind::Deserialization(e.to_string())))
}

#[async_trait]
impl<B: CacheBackend> RecordStore for RecordCache<B> {
    #[tracing::instrument(skip(self, id), fields(id = %id))]
    async fn get(&self, id: AppId) -> Option<CatalogRecord> {
        let key = self.key(id);

        let value = match self.backend.get(&key).await {
            Ok(Some(value)) => value,
            Ok(None) => {
                tracing::debug!("Cache miss");
                return None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Reading cache entry failed");
                return None;
            }
        };

        let record = match decode(&value) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Discarding undecodable cache entry");
                return None;
            }
        };

        if let Err(e) = self.backend.expire(&key, self.config.ttl()).await {
            tracing::warn!(error = %e, "Extending cache key expiration failed");
        }

        tracing::debug!("Cache hit");
        Some(record)
    }

    #[tracing::instrument(skip(self, records), fields(count = records.len()))]
    async fn put(&self, records: &[CatalogRecord]) {
        for record in records {
            if let Err(e) = self.store_one(record).await {
                tracing::error!(id = %record.id(), error = %e, "Saving record to cache failed");
                continue;
            }
            tracing::trace!(id = %record.id(), "Cached record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;

    #[test]
    fn test_key_uses_prefix() {
        let config = RecordCacheConfig::default().with_key_prefix("apps".to_string());
        let cache = RecordCache::new(MemoryBackend::new(), config);
        assert_eq!(cache.key(AppId::new(7)), "apps:7");
    }
}
