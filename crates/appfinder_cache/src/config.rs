//! Record cache configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default key namespace for catalog records.
pub const DEFAULT_KEY_PREFIX: &str = "app_info";

/// Default time-to-live for cached records (3 hours).
pub const DEFAULT_TTL_SECS: u64 = 60 * 60 * 3;

/// Configuration for the record cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder)]
#[setters(prefix = "with_")]
#[builder(setter(into), default)]
pub struct RecordCacheConfig {
    /// Namespace prepended to every key
    #[serde(default = "default_key_prefix")]
    key_prefix: String,

    /// TTL for writes and read refreshes (seconds)
    #[serde(default = "default_ttl_secs")]
    ttl_secs: u64,
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_ttl_secs() -> u64 {
    DEFAULT_TTL_SECS
}

impl Default for RecordCacheConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl RecordCacheConfig {
    /// TTL as a duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
