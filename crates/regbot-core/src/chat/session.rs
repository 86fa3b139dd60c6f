//! Chat session controller.
//!
//! `ChatSession` drives the regulation lookup conversation: it owns the
//! transcript, the cached category and regulation lists, and the current
//! category selection. All mutations flow through here so that every
//! appended message is persisted through the [`HistoryRepository`].

use std::sync::Arc;

use tokio::sync::RwLock;

use super::message::ChatMessage;
use super::reply;
use super::repository::HistoryRepository;
use crate::catalog::{Category, Regulation, RegulationGateway};

/// Mutable conversation state guarded by the session lock.
struct SessionState {
    /// Transcript in append order, oldest first.
    messages: Vec<ChatMessage>,
    /// Categories fetched at startup.
    categories: Vec<Category>,
    /// Id of the currently selected category, if any.
    selected_category: Option<String>,
    /// Regulations of the selected category, in listing order.
    regulations: Vec<Regulation>,
    /// Bumped on every category selection. A regulation list fetched for an
    /// older generation is discarded instead of applied.
    fetch_generation: u64,
}

/// Outcome of matching user input against the cached regulation list.
enum Lookup {
    /// No category has been selected yet.
    NoCategory,
    /// First regulation whose title contains the input, by id.
    Match(String),
    /// A category is selected but no title matched.
    NoMatch,
}

/// Conversation controller for regulation lookup.
///
/// The session is cheap to share: wrap it in an `Arc` and call its methods
/// from any task. Concurrent category selections are serialized by
/// generation so only the most recent selection populates the list.
pub struct ChatSession {
    gateway: Arc<dyn RegulationGateway>,
    history: Arc<dyn HistoryRepository>,
    state: RwLock<SessionState>,
}

impl ChatSession {
    /// Opens a session, restoring the persisted transcript.
    ///
    /// # Arguments
    ///
    /// * `gateway` - Source of categories and regulations
    /// * `history` - Persistent transcript storage
    pub async fn open(
        gateway: Arc<dyn RegulationGateway>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        let messages = history.load().await;
        Self {
            gateway,
            history,
            state: RwLock::new(SessionState {
                messages,
                categories: Vec::new(),
                selected_category: None,
                regulations: Vec::new(),
                fetch_generation: 0,
            }),
        }
    }

    /// Fetches and caches the category list.
    ///
    /// Failure is not fatal: the error is logged and an empty list is
    /// returned, leaving the conversation usable.
    pub async fn load_categories(&self) -> Vec<Category> {
        match self.gateway.list_categories().await {
            Ok(categories) => {
                let mut state = self.state.write().await;
                state.categories = categories.clone();
                categories
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch categories");
                Vec::new()
            }
        }
    }

    /// Selects a category and announces its regulation titles.
    ///
    /// The previous category's regulations are dropped immediately. The new
    /// list is fetched without holding the session lock; if another
    /// selection happens while the fetch is in flight, the late response is
    /// discarded. On a successful fetch a bot message listing the titles is
    /// appended and persisted. On a failed fetch nothing is appended.
    ///
    /// # Arguments
    ///
    /// * `category` - The category to select
    ///
    /// # Returns
    ///
    /// The messages appended to the transcript; empty when the fetch failed
    /// or was superseded.
    pub async fn select_category(&self, category: &Category) -> Vec<ChatMessage> {
        let generation = {
            let mut state = self.state.write().await;
            state.selected_category = Some(category.id.clone());
            state.regulations.clear();
            state.fetch_generation += 1;
            state.fetch_generation
        };

        match self.gateway.list_regulations(&category.id).await {
            Ok(regulations) => {
                let mut state = self.state.write().await;
                if state.fetch_generation != generation {
                    tracing::debug!(
                        category = %category.name,
                        "discarding regulation list from superseded selection"
                    );
                    return Vec::new();
                }
                state.regulations = regulations;
                let listing = ChatMessage::bot(reply::regulation_listing(&state.regulations));
                self.append(&mut state, listing.clone()).await;
                vec![listing]
            }
            Err(e) => {
                tracing::warn!(
                    category = %category.name,
                    error = %e,
                    "failed to fetch regulation list"
                );
                Vec::new()
            }
        }
    }

    /// Handles one line of user input.
    ///
    /// Whitespace-only input is ignored without touching the transcript.
    /// Otherwise the raw input is appended as a user message, matched
    /// case-insensitively against the cached regulation titles, and answered
    /// with the first matching regulation's content. Input with no category
    /// selected, no matching title, or a failed content fetch gets a canned
    /// reply instead.
    ///
    /// # Arguments
    ///
    /// * `input` - The user's line, kept verbatim in the transcript
    ///
    /// # Returns
    ///
    /// The messages appended to the transcript (the user message and the
    /// bot answer); empty for whitespace-only input.
    pub async fn submit_input(&self, input: &str) -> Vec<ChatMessage> {
        if input.trim().is_empty() {
            return Vec::new();
        }

        let user_message = ChatMessage::user(input);
        {
            let mut state = self.state.write().await;
            self.append(&mut state, user_message.clone()).await;
        }

        let lookup = {
            let state = self.state.read().await;
            if state.selected_category.is_none() {
                Lookup::NoCategory
            } else {
                match state.regulations.iter().find(|r| r.title_contains(input)) {
                    Some(regulation) => Lookup::Match(regulation.id.clone()),
                    None => Lookup::NoMatch,
                }
            }
        };

        let reply_text = match lookup {
            Lookup::NoCategory => reply::SELECT_CATEGORY_REPLY.to_string(),
            Lookup::NoMatch => reply::UNKNOWN_REPLY.to_string(),
            Lookup::Match(id) => match self.gateway.get_regulation(&id).await {
                Ok(regulation) => regulation.content,
                Err(e) => {
                    tracing::warn!(
                        regulation_id = %id,
                        error = %e,
                        "failed to fetch regulation content"
                    );
                    reply::UNKNOWN_REPLY.to_string()
                }
            },
        };

        let bot_message = ChatMessage::bot(reply_text);
        let mut state = self.state.write().await;
        self.append(&mut state, bot_message.clone()).await;

        vec![user_message, bot_message]
    }

    /// Returns a copy of the transcript, oldest message first.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.state.read().await.messages.clone()
    }

    /// Returns the cached category list.
    pub async fn categories(&self) -> Vec<Category> {
        self.state.read().await.categories.clone()
    }

    /// Returns the id of the selected category, if any.
    pub async fn selected_category(&self) -> Option<String> {
        self.state.read().await.selected_category.clone()
    }

    /// Returns the cached regulations of the selected category.
    pub async fn cached_regulations(&self) -> Vec<Regulation> {
        self.state.read().await.regulations.clone()
    }

    /// Appends a message and persists the whole transcript.
    ///
    /// A failed save is logged and the in-memory transcript keeps the
    /// message, so the conversation continues without the persisted copy.
    async fn append(&self, state: &mut SessionState, message: ChatMessage) {
        state.messages.push(message);
        if let Err(e) = self.history.save(&state.messages).await {
            tracing::warn!(error = %e, "failed to persist chat history");
        }
    }
}
