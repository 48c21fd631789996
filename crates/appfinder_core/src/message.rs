//! Transport-neutral inbound message.

use serde::{Deserialize, Serialize};

/// A text message delivered by the chat transport.
///
/// # Examples
///
/// ```
/// use appfinder_core::InboundMessage;
///
/// let message = InboundMessage::new(1001, "Chess").with_sender("alice");
/// assert_eq!(message.text(), "Chess");
/// assert_eq!(message.sender().as_deref(), Some("alice"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", into, strip_option)]
pub struct InboundMessage {
    /// Conversation the message belongs to
    chat_id: i64,
    /// Sender display handle, when known
    sender: Option<String>,
    /// Message text
    text: String,
}

impl InboundMessage {
    /// Create a message without sender information.
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            sender: None,
            text: text.into(),
        }
    }
}
