//! Message handling for the AppFinder bot.
//!
//! This crate turns inbound chat text into replies:
//! - `AppFinder` - Orchestrator deciding between commands, detail requests, and searches
//! - `presentation` - Detail blocks and parseable choice labels
//! - `BotCommand` - The informational commands the bot answers
//!
//! # Platform Support
//!
//! The orchestrator is transport-neutral. Platform adapters are feature-gated
//! and live in their own submodule:
//! - `telegram` - Telegram bot integration (requires `telegram` feature)

#![warn(missing_docs)]

mod commands;
mod interaction;
pub mod presentation;

#[cfg(feature = "telegram")]
mod telegram;

pub use commands::{BotCommand, WELCOME_TEXT, parse_command};
pub use interaction::{AppFinder, CHOOSE_PROMPT, Intent, NO_RESULT, SharedFinder, classify};
pub use presentation::{parse_choice_label, render_choice_label, render_detail};

#[cfg(feature = "telegram")]
pub use telegram::{AppFinderBot, TelegramSink, to_inbound, to_reply_markup};
