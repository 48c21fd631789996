//! Catalog record caching with sliding TTL support.
//!
//! This crate keeps recently displayed catalog records in a key-value store so
//! repeated detail requests skip the upstream lookup. Records live under a
//! namespaced key (`app_info:<id>` by default), expire after a fixed window,
//! and every successful read resets that window.
//!
//! Two backends are provided:
//! - [`RedisBackend`] for deployments
//! - [`MemoryBackend`] for tests and local runs

#![warn(missing_docs)]

mod config;
mod memory;
mod record_cache;
mod redis_backend;

pub use config::{
    DEFAULT_KEY_PREFIX, DEFAULT_TTL_SECS, RecordCacheConfig, RecordCacheConfigBuilder,
};
pub use memory::{MemoryBackend, MemoryEntry};
pub use record_cache::RecordCache;
pub use redis_backend::{CacheAuth, RedisBackend, RedisConfig};
