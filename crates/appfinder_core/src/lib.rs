//! Core data types for AppFinder.
//!
//! This crate provides the data model shared by every AppFinder component:
//! catalog records as returned by the upstream search service, the response
//! envelope, and the transport-neutral inbound message and outbound reply.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod envelope;
mod message;
mod record;
mod reply;

pub use envelope::SearchResponse;
pub use message::InboundMessage;
pub use record::{AppId, CatalogRecord};
pub use reply::{Reply, ReplyMarkup, TextFormat};

/// Maximum number of records a text search returns.
pub const SEARCH_RESULT_CAP: usize = 8;

/// Maximum number of records an identifier lookup returns.
pub const LOOKUP_RESULT_CAP: usize = 1;
