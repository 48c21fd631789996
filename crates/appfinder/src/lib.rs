//! AppFinder - App catalog search bot
//!
//! AppFinder lets chat users search the public app catalog by title and pull
//! up the full record of any result. Detail records are cached in Redis with
//! a sliding three-hour window so repeated lookups skip the upstream service.
//!
//! # Architecture
//!
//! AppFinder is organized as a workspace with focused crates:
//!
//! - `appfinder-core` - Data types (CatalogRecord, Reply, etc.)
//! - `appfinder-interface` - CatalogSource, RecordStore, CacheBackend, ReplySink traits
//! - `appfinder-error` - Error types
//! - `appfinder-catalog` - Upstream search and lookup client
//! - `appfinder-cache` - Record cache with Redis and in-memory backends
//! - `appfinder-social` - Orchestrator, presentation, and Telegram adapter
//!
//! This crate (`appfinder`) re-exports everything for convenience and hosts
//! the binary's configuration, logging, and startup wiring.
//!
//! # Cargo Features
//!
//! - `telegram` - Telegram transport and the `appfinder` binary (default)
//! - `api` - Un-ignore tests that need live services

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
mod logging;
mod settings;
mod startup;

pub use logging::{LoggingConfig, init_logging, open_log_file};
pub use settings::{AppFinderConfig, DEFAULT_CONFIG_FILE};
pub use startup::{assemble_finder, connect_finder};

// Re-export component crates
pub use appfinder_cache::*;
pub use appfinder_catalog::{
    CatalogClient, CatalogConfig, CatalogConfigBuilder, DEFAULT_LOOKUP_URL, DEFAULT_SEARCH_URL,
    DEFAULT_TIMEOUT_SECS, parse_response,
};
pub use appfinder_core::*;
pub use appfinder_error::*;
pub use appfinder_interface::*;
pub use appfinder_social::*;
