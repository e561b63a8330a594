//! Conversation domain entities

use crate::category::ContentCategory;
use serde::{Deserialize, Serialize};

/// Role of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in a conversation (Entity)
///
/// Immutable once created; turns form an append-only ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The turn history and category selection for one session (Entity)
///
/// Every request re-sends the entire turn sequence, so request size grows
/// without bound over a long session and can eventually exceed the model's
/// context window. There is deliberately no truncation or summarization
/// policy here.
#[derive(Debug, Clone)]
pub struct Conversation {
    turns: Vec<Turn>,
    category: ContentCategory,
}

impl Conversation {
    /// Create an empty conversation with the given category selected
    pub fn new(category: ContentCategory) -> Self {
        Self {
            turns: Vec::new(),
            category,
        }
    }

    /// True iff no turns have been recorded yet
    pub fn is_first_turn(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn category(&self) -> ContentCategory {
        self.category
    }

    /// Select a category. Only affects composition of the *first* turn:
    /// once any turn exists the selection is ignored for prompting.
    pub fn set_category(&mut self, category: ContentCategory) {
        self.category = category;
    }

    /// Compose the outgoing user message for the next round.
    ///
    /// On the first turn the selected category's instruction template is
    /// prepended; afterwards the raw input is returned unchanged and the
    /// model relies on the prior turns for context.
    pub fn compose_user_turn(&self, raw_input: &str) -> String {
        if self.is_first_turn() {
            format!("{}\n{}", self.category.prompt_prefix(), raw_input)
        } else {
            raw_input.to_string()
        }
    }

    /// Record one completed round: the **raw** user input (never the
    /// composed form) followed by the assistant's reply.
    pub fn push_round(&mut self, user_raw: impl Into<String>, assistant_reply: impl Into<String>) {
        self.turns.push(Turn::user(user_raw));
        self.turns.push(Turn::assistant(assistant_reply));
    }

    /// Clear the turn history. The selected category is kept.
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    /// Cloned copy of the turn sequence for building a request.
    ///
    /// Copy-on-read: the conversation is mutated by [`push_round`] after a
    /// request has been issued, so callers must not hold a borrow.
    ///
    /// [`push_round`]: Conversation::push_round
    pub fn snapshot_messages(&self) -> Vec<Turn> {
        self.turns.clone()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(ContentCategory::default())
    }
}
