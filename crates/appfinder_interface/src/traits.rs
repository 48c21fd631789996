//! Trait definitions for the catalog, record store, and cache backend.

use appfinder_core::{AppId, CatalogRecord, Reply};
use appfinder_error::{CacheResult, CatalogResult, TransportError};
use async_trait::async_trait;
use std::time::Duration;

/// Read-only access to the upstream app catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Free-text search, returning at most the search cap in upstream order.
    async fn search(&self, term: &str) -> CatalogResult<Vec<CatalogRecord>>;

    /// Single identifier lookup. An empty result means "not found".
    async fn lookup(&self, id: AppId) -> CatalogResult<Vec<CatalogRecord>>;
}

/// Time-bounded record storage keyed by app identifier.
///
/// Implementations absorb their own failures: a failed read is a miss and a
/// failed write is logged and skipped.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a record, refreshing its expiry on a hit.
    async fn get(&self, id: AppId) -> Option<CatalogRecord>;

    /// Store every record, continuing past individual failures.
    async fn put(&self, records: &[CatalogRecord]);
}

/// Raw string key-value store with per-key expiry.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Read a value. `Ok(None)` when the key is absent or expired.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Write a value that expires after `ttl`.
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Reset the remaining lifetime of an existing key to `ttl`.
    async fn expire(&self, key: &str, ttl: Duration) -> CacheResult<()>;

    /// Verify the store is reachable.
    async fn ping(&self) -> CacheResult<()>;
}

/// Outbound side of the chat transport.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Deliver a reply to a conversation.
    async fn send(&self, chat_id: i64, reply: Reply) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for std::sync::Arc<T> {
    async fn search(&self, term: &str) -> CatalogResult<Vec<CatalogRecord>> {
        (**self).search(term).await
    }

    async fn lookup(&self, id: AppId) -> CatalogResult<Vec<CatalogRecord>> {
        (**self).lookup(id).await
    }
}

#[async_trait]
impl<T: RecordStore + ?Sized> RecordStore for std::sync::Arc<T> {
    async fn get(&self, id: AppId) -> Option<CatalogRecord> {
        (**self).get(id).await
    }

    async fn put(&self, records: &[CatalogRecord]) {
        (**self).put(records).await
    }
}

#[async_trait]
impl<T: CacheBackend + ?Sized> CacheBackend for std::sync::Arc<T> {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        (**self).set_with_ttl(key, value, ttl).await
    }

    async fn expire(&self, key: &str, ttl: Duration) -> CacheResult<()> {
        (**self).expire(key, ttl).await
    }

    async fn ping(&self) -> CacheResult<()> {
        (**self).ping().await
    }
}
