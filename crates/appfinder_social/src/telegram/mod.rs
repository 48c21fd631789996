//! Telegram integration for AppFinder.
//!
//! This module connects the transport-neutral [`AppFinder`](crate::AppFinder)
//! orchestrator to Telegram using the teloxide library.
//!
//! # Architecture
//!
//! - **client**: bot construction, token verification, and the long-polling dispatcher
//! - **conversions**: mapping between Telegram messages/markup and AppFinder types
//!
//! # Usage
//!
//! Available with the `telegram` feature.
//!
//! ```rust,ignore
//! use appfinder_social::{AppFinder, AppFinderBot};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let finder = Arc::new(AppFinder::new(catalog, store));
//!     let bot = AppFinderBot::new(std::env::var("APPFINDER_BOT_TOKEN")?, finder).await?;
//!     bot.start().await;
//!     Ok(())
//! }
//! ```

mod client;
mod conversions;

pub use client::AppFinderBot;
pub use conversions::{TelegramSink, to_inbound, to_reply_markup};
