//! Upstream app catalog client for AppFinder.
//!
//! Issues the two read-only queries the bot needs against the public
//! catalog search service: a free-text search capped at eight software
//! results, and a single-identifier lookup.
//!
//! # Example
//!
//! ```rust,no_run
//! use appfinder_catalog::{CatalogClient, CatalogConfig};
//! use appfinder_interface::CatalogSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::default())?;
//!
//!     for record in client.search("chess").await? {
//!         println!("{} {}", record.id(), record.name());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;

pub use appfinder_error::{CatalogError, CatalogErrorKind, CatalogResult};
pub use client::{CatalogClient, parse_response};
pub use config::{
    CatalogConfig, CatalogConfigBuilder, DEFAULT_LOOKUP_URL, DEFAULT_SEARCH_URL,
    DEFAULT_TIMEOUT_SECS,
};
