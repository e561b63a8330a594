//! Wire types for the DeepSeek chat-completion API.
//!
//! The request body carries the full message sequence plus sampling
//! settings; `stream` is always `false` — the whole response is awaited as
//! one unit. Only `choices[0].message.content` of the response is consumed.

use serde::{Deserialize, Serialize};
use wayfarer_application::GatewayError;
use wayfarer_domain::{Role, Turn};

/// Outgoing request body for `POST /chat/completions`
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
    pub temperature: f32,
    pub stream: bool,
}

/// One message of the outgoing sequence
#[derive(Debug, Serialize)]
pub struct WireMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> WireMessage<'a> {
    pub fn from_turn(turn: &'a Turn) -> Self {
        Self {
            role: match turn.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            },
            content: &turn.content,
        }
    }
}

/// Success response body
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

impl ChatCompletionResponse {
    /// Extract the first choice's content, trimmed of surrounding whitespace.
    pub fn into_content(self) -> Result<String, GatewayError> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .ok_or(GatewayError::EmptyChoices)
    }
}
