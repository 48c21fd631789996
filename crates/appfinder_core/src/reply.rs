//! Transport-neutral outbound reply.

use serde::{Deserialize, Serialize};

/// How the transport should interpret reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextFormat {
    /// Send as-is
    #[default]
    Plain,
    /// Interpret as HTML rich text
    Html,
}

/// Structured attachment for a reply.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReplyMarkup {
    /// Leave any displayed keyboard untouched
    #[default]
    None,
    /// Hide a previously displayed choice list
    RemoveChoices,
    /// Offer a one-time list of selectable labels, one per row
    Choices(Vec<String>),
}

/// A reply produced for one inbound message.
///
/// # Examples
///
/// ```
/// use appfinder_core::{Reply, ReplyMarkup, TextFormat};
///
/// let reply = Reply::html("<b>Chess</b>").with_markup(ReplyMarkup::RemoveChoices);
/// assert_eq!(reply.format, TextFormat::Html);
/// assert_eq!(reply.markup, ReplyMarkup::RemoveChoices);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Reply body
    pub text: String,
    /// Rendering mode for the body
    pub format: TextFormat,
    /// Optional attachment
    pub markup: ReplyMarkup,
}

impl Reply {
    /// Plain text reply without markup.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            markup: ReplyMarkup::None,
        }
    }

    /// HTML reply without markup.
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Html,
            markup: ReplyMarkup::None,
        }
    }

    /// Attach markup to this reply.
    pub fn with_markup(mut self, markup: ReplyMarkup) -> Self {
        self.markup = markup;
        self
    }

    /// Labels offered by this reply, if it carries a choice list.
    pub fn choices(&self) -> Option<&[String]> {
        match &self.markup {
            ReplyMarkup::Choices(labels) => Some(labels),
            _ => None,
        }
    }
}
