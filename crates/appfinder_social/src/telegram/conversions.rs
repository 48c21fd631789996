//! Conversions between Telegram types and AppFinder types.

use appfinder_core::{InboundMessage, Reply, ReplyMarkup, TextFormat};
use appfinder_error::{TransportError, TransportErrorKind};
use appfinder_interface::ReplySink;
use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, KeyboardRemove, ParseMode};

/// Convert a Telegram message into an inbound message.
///
/// Returns `None` for updates without text (stickers, photos, service messages).
pub fn to_inbound(message: &Message) -> Option<InboundMessage> {
    let text = message.text()?;
    let inbound = InboundMessage::new(message.chat.id.0, text);
    Some(match sender_username(message) {
        Some(username) => inbound.with_sender(username),
        None => inbound,
    })
}

/// Handle of the user who sent the message, not of the chat it arrived in.
fn sender_username(message: &Message) -> Option<&str> {
    message.from.as_ref()?.username.as_deref()
}

/// Convert reply markup into a Telegram keyboard attachment.
pub fn to_reply_markup(markup: &ReplyMarkup) -> Option<teloxide::types::ReplyMarkup> {
    match markup {
        ReplyMarkup::None => None,
        ReplyMarkup::RemoveChoices => Some(teloxide::types::ReplyMarkup::KeyboardRemove(
            KeyboardRemove::new(),
        )),
        ReplyMarkup::Choices(labels) => {
            let rows = labels
                .iter()
                .map(|label| vec![KeyboardButton::new(label.clone())]);
            Some(teloxide::types::ReplyMarkup::Keyboard(
                KeyboardMarkup::new(rows).one_time_keyboard(),
            ))
        }
    }
}

/// Reply sink delivering through the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct TelegramSink {
    bot: Bot,
}

impl TelegramSink {
    /// Wrap a bot handle.
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ReplySink for TelegramSink {
    async fn send(&self, chat_id: i64, reply: Reply) -> Result<(), TransportError> {
        let mut request = self.bot.send_message(ChatId(chat_id), reply.text);

        if reply.format == TextFormat::Html {
            request = request.parse_mode(ParseMode::Html);
        }
        if let Some(markup) = to_reply_markup(&reply.markup) {
            request = request.reply_markup(markup);
        }

        request.send().await.map_err(|e| {
            TransportError::new(TransportErrorKind::Send(e.to_string()))
        })?;
        Ok(())
    }
}
