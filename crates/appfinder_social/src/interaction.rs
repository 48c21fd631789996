//! Inbound message orchestration.
//!
//! Each message is handled on its own: no session state is kept beyond what
//! the record store holds.
//!
//! # Flow
//!
//! 1. Slash commands get the canned welcome text.
//! 2. Text shaped like a choice label becomes a detail request for its
//!    identifier; a label whose identifier is not a number gets "No result found.".
//! 3. Anything else is searched as-is.

use crate::commands::{BotCommand, WELCOME_TEXT, parse_command};
use crate::presentation::{choice_label_id, render_choice_label, render_detail};
use appfinder_core::{AppId, InboundMessage, Reply, ReplyMarkup};
use appfinder_interface::{CatalogSource, RecordStore, ReplySink};
use std::sync::Arc;
use tracing::instrument;

/// Reply when a search or lookup yields nothing.
pub const NO_RESULT: &str = "No result found.";

/// Text accompanying a choice list.
pub const CHOOSE_PROMPT: &str = "Choose one of Results:";

/// What an inbound message asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A slash command
    Command(BotCommand),
    /// Full record of one app
    Detail(AppId),
    /// Choice label whose identifier is not a number
    UnknownDetail(String),
    /// Free-text catalog search
    Search(String),
}

/// Decide what a message asks for.
///
/// # Examples
///
/// ```
/// use appfinder_core::AppId;
/// use appfinder_social::{BotCommand, Intent, classify};
///
/// assert_eq!(classify("/help"), Intent::Command(BotCommand::Help));
/// assert_eq!(classify("(ID: 42) - Chess"), Intent::Detail(AppId::new(42)));
/// assert_eq!(classify("(ID: abc) - Chess"), Intent::UnknownDetail("abc".into()));
/// assert_eq!(classify("(ID: 42 Chess"), Intent::Search("(ID: 42 Chess".into()));
/// ```
pub fn classify(text: &str) -> Intent {
    if let Some(command) = parse_command(text) {
        return Intent::Command(command);
    }
    if let Some(raw) = choice_label_id(text) {
        return match raw.parse() {
            Ok(id) => Intent::Detail(id),
            Err(_) => Intent::UnknownDetail(raw.to_string()),
        };
    }
    Intent::Search(text.to_string())
}

/// Orchestrator over type-erased collaborators, shared by every message handler.
pub type SharedFinder = Arc<AppFinder<Arc<dyn CatalogSource>, Arc<dyn RecordStore>>>;

/// Interaction orchestrator.
///
/// Drives the catalog and the record store for each inbound message and
/// hands the reply to the transport. Both collaborators are injected so tests
/// can swap in fakes; the store is expected to be a single shared client.
///
/// Records are written to the store only after the reply carrying them has
/// been handed off.
#[derive(Debug, Clone)]
pub struct AppFinder<C, S> {
    catalog: C,
    store: S,
}

impl<C: CatalogSource, S: RecordStore> AppFinder<C, S> {
    /// Create an orchestrator over a catalog and a record store.
    pub fn new(catalog: C, store: S) -> Self {
        Self { catalog, store }
    }

    /// Catalog collaborator.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Record store collaborator.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle one inbound message, replying through `sink`.
    ///
    /// Blank text and unsupported commands get no reply. Failures never
    /// escape: they are logged and answered with [`NO_RESULT`].
    #[instrument(skip(self, message, sink), fields(chat_id = message.chat_id()))]
    pub async fn handle(&self, message: &InboundMessage, sink: &dyn ReplySink) {
        let text = message.text();
        if text.trim().is_empty() {
            return;
        }

        tracing::info!(sender = ?message.sender(), text = %text, "Text message received");

        let chat_id = *message.chat_id();
        match classify(text) {
            Intent::Command(BotCommand::Start) | Intent::Command(BotCommand::Help) => {
                let reply = Reply::html(WELCOME_TEXT).with_markup(ReplyMarkup::RemoveChoices);
                deliver(sink, chat_id, reply).await;
            }
            Intent::Command(BotCommand::Unknown(name)) => {
                tracing::warn!(command = %name, "Unsupported command received");
            }
            Intent::Detail(id) => self.detail(id, chat_id, sink).await,
            Intent::UnknownDetail(raw) => {
                tracing::warn!(id = %raw, "Choice label carries an unusable identifier");
                let reply = Reply::plain(NO_RESULT).with_markup(ReplyMarkup::RemoveChoices);
                deliver(sink, chat_id, reply).await;
            }
            Intent::Search(term) => self.search(&term, chat_id, sink).await,
        }
    }

    /// Answer a detail request, preferring the cached record.
    #[instrument(skip(self, id, sink), fields(id = %id))]
    pub async fn detail(&self, id: AppId, chat_id: i64, sink: &dyn ReplySink) {
        if let Some(record) = self.store.get(id).await {
            tracing::debug!("Serving detail from cache");
            let reply = Reply::html(render_detail(&record)).with_markup(ReplyMarkup::RemoveChoices);
            deliver(sink, chat_id, reply).await;
            return;
        }

        let records = match self.catalog.lookup(id).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error = %e, "Catalog lookup failed");
                Vec::new()
            }
        };

        let Some(record) = records.first() else {
            let reply = Reply::plain(NO_RESULT).with_markup(ReplyMarkup::RemoveChoices);
            deliver(sink, chat_id, reply).await;
            return;
        };

        let reply = Reply::html(render_detail(record)).with_markup(ReplyMarkup::RemoveChoices);
        deliver(sink, chat_id, reply).await;
        self.store.put(&records).await;
    }

    /// Answer a search request with a choice list.
    #[instrument(skip(self, sink))]
    pub async fn search(&self, term: &str, chat_id: i64, sink: &dyn ReplySink) {
        let records = match self.catalog.search(term).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error = %e, "Catalog search failed");
                Vec::new()
            }
        };

        if records.is_empty() {
            deliver(sink, chat_id, Reply::plain(NO_RESULT)).await;
            return;
        }

        let labels = records.iter().map(render_choice_label).collect();
        let reply = Reply::plain(CHOOSE_PROMPT).with_markup(ReplyMarkup::Choices(labels));
        deliver(sink, chat_id, reply).await;
        self.store.put(&records).await;
    }
}

async fn deliver(sink: &dyn ReplySink, chat_id: i64, reply: Reply) {
    if let Err(e) = sink.send(chat_id, reply).await {
        tracing::error!(chat_id, error = %e, "Sending reply failed");
    }
}
