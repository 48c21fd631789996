//! Telegram bot client setup and lifecycle management.
//!
//! This module provides the AppFinderBot struct which verifies the bot token,
//! receives updates by long polling, and routes every text message through
//! the shared orchestrator.

use super::conversions::{TelegramSink, to_inbound};
use crate::SharedFinder;
use appfinder_error::{TransportError, TransportErrorKind};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::dptree;
use teloxide::{ApiError, RequestError};
use tracing::{info, instrument};

/// Telegram bot front end for AppFinder.
pub struct AppFinderBot {
    bot: Bot,
    finder: SharedFinder,
}

impl AppFinderBot {
    /// Create a new AppFinderBot instance.
    ///
    /// # Arguments
    /// * `token` - Telegram bot token from BotFather
    /// * `finder` - Shared orchestrator
    ///
    /// # Errors
    /// Returns an error if the token is rejected or Telegram cannot be reached.
    #[instrument(skip(token, finder), fields(token_len = token.len()))]
    pub async fn new(token: String, finder: SharedFinder) -> Result<Self, TransportError> {
        info!("Initializing AppFinder Telegram bot");

        let bot = Bot::new(token);
        let me = bot.get_me().await.map_err(|e| match e {
            RequestError::Api(ApiError::InvalidToken) => {
                TransportError::new(TransportErrorKind::InvalidToken)
            }
            other => TransportError::new(TransportErrorKind::Connection(format!(
                "Failed to reach Telegram: {}",
                other
            ))),
        })?;

        info!(
            username = me.user.username.as_deref().unwrap_or_default(),
            "Bot authorized"
        );

        Ok(Self { bot, finder })
    }

    /// Start receiving updates.
    ///
    /// Blocks until the bot is shut down (e.g., via Ctrl+C). Each update is
    /// handled on its own task; non-text updates are ignored.
    #[instrument(skip(self))]
    pub async fn start(self) {
        info!("Starting Telegram dispatcher");

        let sink = Arc::new(TelegramSink::new(self.bot.clone()));
        let handler = Update::filter_message().endpoint(handle_message);

        Dispatcher::builder(self.bot, handler)
            .dependencies(dptree::deps![self.finder, sink])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Telegram dispatcher stopped");
    }
}

async fn handle_message(
    message: Message,
    finder: SharedFinder,
    sink: Arc<TelegramSink>,
) -> ResponseResult<()> {
    if let Some(inbound) = to_inbound(&message) {
        finder.handle(&inbound, sink.as_ref()).await;
    }
    Ok(())
}
