//! In-process cache backend.

use appfinder_error::CacheResult;
use appfinder_interface::CacheBackend;
use async_trait::async_trait;
use derive_getters::Getters;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Stored value with its expiry deadline.
#[derive(Debug, Clone, Getters)]
pub struct MemoryEntry {
    value: String,
    expires_at: Instant,
}

impl MemoryEntry {
    /// Check if this entry is expired.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Get remaining time until expiration.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.expires_at.checked_duration_since(Instant::now())
    }
}

/// Key-value backend held in process memory.
///
/// Uses the tokio clock, so tests running with a paused runtime can advance
/// time to exercise expiry.
///
/// # Example
///
/// ```
/// use appfinder_cache::MemoryBackend;
/// use appfinder_interface::CacheBackend;
/// use std::time::Duration;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let backend = MemoryBackend::new();
/// backend.set_with_ttl("app_info:1", "{}", Duration::from_secs(60)).await.unwrap();
///
/// assert_eq!(backend.get("app_info:1").await.unwrap().as_deref(), Some("{}"));
/// assert!(backend.time_remaining("app_info:1").is_some());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, MemoryEntry>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining lifetime of a live key.
    pub fn time_remaining(&self, key: &str) -> Option<Duration> {
        let entries = self.entries.lock();
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .and_then(MemoryEntry::time_remaining)
    }

    /// Raw stored value of a live key, without touching its expiry.
    pub fn peek(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock();
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone())
    }

    /// Store a value directly, bypassing record encoding.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>, ttl: Duration) {
        let entry = MemoryEntry {
            value: value.into(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().insert(key.into(), entry);
    }

    /// Keys of all live entries, sorted.
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.lock();
        let mut keys: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| !entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Remove expired entries from the backend.
    pub fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());

        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = entries.len(), "Cleaned up expired cache entries");
        }
        removed
    }

    /// Get number of live entries.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .values()
            .filter(|entry| !entry.is_expired())
            .count()
    }

    /// Check if no live entries remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheBackend for MemoryBackend {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                tracing::debug!(key, "Cache entry expired, removing");
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.insert_raw(key, value, ttl);
        Ok(())
    }

    async fn expire(&self, key: &str, ttl: Duration) -> CacheResult<()> {
        let mut entries = self.entries.lock();
        if let Some(entry) = entries.get_mut(key)
            && !entry.is_expired()
        {
            entry.expires_at = Instant::now() + ttl;
        }
        Ok(())
    }

    async fn ping(&self) -> CacheResult<()> {
        Ok(())
    }
}
