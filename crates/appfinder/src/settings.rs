//! Layered runtime settings.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (appfinder.toml shipped with the binary)
//! 2. `./appfinder.toml`, or the file given with `--config`
//! 3. `APPFINDER__<SECTION>__<KEY>` environment variables

use appfinder_cache::RecordCacheConfig;
use appfinder_catalog::CatalogConfig;
use appfinder_error::{AppFinderError, AppFinderResult, ConfigError};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Default configuration bundled with the binary.
const DEFAULT_CONFIG: &str = include_str!("../appfinder.toml");

/// Optional settings file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "appfinder";

/// Tunables that are not startup credentials.
///
/// # Example
///
/// ```toml
/// [catalog]
/// timeout_secs = 5
///
/// [cache]
/// key_prefix = "app_info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppFinderConfig {
    /// Upstream catalog endpoints and timeout
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Record cache namespace and TTL
    #[serde(default)]
    pub cache: RecordCacheConfig,
}

impl AppFinderConfig {
    /// Load settings, using `path` instead of `./appfinder.toml` when given.
    ///
    /// An explicit path must exist; the working-directory file is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> AppFinderResult<Self> {
        debug!("Loading settings: environment > settings file > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        builder = match path {
            Some(path) => builder.add_source(File::from(path).format(FileFormat::Toml)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        builder
            .add_source(
                Environment::with_prefix("APPFINDER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                AppFinderError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                AppFinderError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse settings from a TOML string, filling gaps with defaults.
    pub fn from_toml(content: &str) -> AppFinderResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| {
                AppFinderError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
