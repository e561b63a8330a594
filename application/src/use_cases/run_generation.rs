//! Run Generation use case.
//!
//! Executes one generation round: compose the outgoing user turn from the
//! conversation state, issue a single gateway call with the full turn
//! history, and on success append the round to the conversation.
//!
//! On failure the conversation is left untouched and the typed
//! [`GatewayError`] is returned — the driver decides how to render it and
//! whether to record it as the assistant's reply.

use crate::ports::content_gateway::{ContentGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use wayfarer_domain::{Conversation, GenerationRequest, Temperature, Turn};

/// Errors that can occur during a generation round.
#[derive(Error, Debug)]
pub enum RunGenerationError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Input for the [`RunGenerationUseCase`].
#[derive(Debug, Clone)]
pub struct RunGenerationInput {
    /// The user's raw request text. Assumed non-empty — the surrounding
    /// interface rejects empty input before invoking the core.
    pub raw_input: String,
    /// Sampling temperature for this round.
    pub temperature: Temperature,
}

impl RunGenerationInput {
    pub fn new(raw_input: impl Into<String>, temperature: Temperature) -> Self {
        Self {
            raw_input: raw_input.into(),
            temperature,
        }
    }
}

/// Use case for running one generation round.
///
/// Exactly one request is in flight at a time: the caller awaits each round
/// before issuing the next, and the conversation is only ever touched from
/// that single logical flow.
pub struct RunGenerationUseCase {
    gateway: Arc<dyn ContentGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunGenerationUseCase {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute one round against the given conversation.
    ///
    /// The outgoing message sequence is the full history snapshot plus the
    /// composed user turn; the stored history receives the **raw** input, so
    /// the instruction template is sent once and never re-seen.
    pub async fn execute(
        &self,
        conversation: &mut Conversation,
        input: RunGenerationInput,
    ) -> Result<String, RunGenerationError> {
        let first_turn = conversation.is_first_turn();
        info!(
            first_turn,
            category = %conversation.category(),
            "Starting generation round"
        );

        let outgoing = conversation.compose_user_turn(&input.raw_input);
        let mut messages = conversation.snapshot_messages();
        messages.push(Turn::user(outgoing));

        debug!(
            messages = messages.len(),
            temperature = %input.temperature,
            "Issuing generation request"
        );

        self.conversation_logger.log(ConversationEvent::new(
            "user_turn",
            serde_json::json!({
                "category": conversation.category().as_str(),
                "first_turn": first_turn,
                "text": input.raw_input,
            }),
        ));

        let request = GenerationRequest::new(messages, input.temperature);
        match self.gateway.generate(&request).await {
            Ok(reply) => {
                conversation.push_round(&input.raw_input, &reply);
                info!(bytes = reply.len(), "Generation round completed");

                self.conversation_logger.log(ConversationEvent::new(
                    "assistant_reply",
                    serde_json::json!({
                        "bytes": reply.len(),
                        "text": reply,
                    }),
                ));

                Ok(reply)
            }
            Err(e) => {
                warn!("Generation failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "generation_failed",
                    serde_json::json!({ "error": e.to_string() }),
                ));
                Err(e.into())
            }
        }
    }
}
