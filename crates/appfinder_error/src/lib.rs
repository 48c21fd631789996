//! Error types for AppFinder.
//!
//! This crate provides the foundation error types used throughout the AppFinder workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use appfinder_error::{AppFinderResult, CatalogError, CatalogErrorKind};
//!
//! fn fetch_data() -> AppFinderResult<String> {
//!     Err(CatalogError::new(CatalogErrorKind::Http("Connection refused".into())))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod catalog;
mod config;
mod error;
mod transport;

pub use cache::{CacheError, CacheErrorKind, CacheResult};
pub use catalog::{CatalogError, CatalogErrorKind, CatalogResult};
pub use config::ConfigError;
pub use error::{AppFinderError, AppFinderErrorKind, AppFinderResult};
pub use transport::{TransportError, TransportErrorKind};
