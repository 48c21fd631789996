//! Configuration for the upstream catalog connection

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default free-text search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://itunes.apple.com/search";

/// Default identifier lookup endpoint.
pub const DEFAULT_LOOKUP_URL: &str = "https://itunes.apple.com/lookup";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the upstream catalog connection
///
/// # Examples
///
/// ```
/// use appfinder_catalog::{CatalogConfig, CatalogConfigBuilder};
///
/// let config = CatalogConfigBuilder::default()
///     .search_url("http://localhost:9000/search")
///     .timeout_secs(3u64)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.search_url(), "http://localhost:9000/search");
/// assert_eq!(config.lookup_url(), appfinder_catalog::DEFAULT_LOOKUP_URL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct CatalogConfig {
    /// Free-text search endpoint
    #[serde(default = "default_search_url")]
    search_url: String,

    /// Identifier lookup endpoint
    #[serde(default = "default_lookup_url")]
    lookup_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_lookup_url() -> String {
    DEFAULT_LOOKUP_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            lookup_url: default_lookup_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogConfig {
    /// Per-request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
