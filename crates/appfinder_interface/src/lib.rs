//! Trait definitions for AppFinder components.
//!
//! The orchestrator only talks to its collaborators through these traits, so
//! the upstream catalog, the cache store, and the chat transport can be
//! swapped for fakes in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CacheBackend, CatalogSource, RecordStore, ReplySink};
