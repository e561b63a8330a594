//! HTTP adapter for the DeepSeek chat-completion API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::providers::deepseek::types::{ChatCompletionResponse, ChatRequest, WireMessage};
use wayfarer_application::{ContentGateway, GatewayError};
use wayfarer_domain::{GenerationRequest, Model};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
/// Bounded wait for the full (non-streamed) response.
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Gateway adapter for the DeepSeek chat-completion service.
///
/// Holds the caller's credential for its lifetime and nothing else — each
/// [`generate`](ContentGateway::generate) call is an independent round trip
/// with no retry and no state carried across calls.
pub struct DeepSeekGateway {
    client: reqwest::Client,
    api_key: String,
    model: Model,
    /// Full endpoint URL (base + CHAT_COMPLETIONS_PATH).
    url: String,
}

impl DeepSeekGateway {
    pub fn new(api_key: impl Into<String>, model: Model, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let trimmed = base.trim_end_matches('/');
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model,
            url: format!("{trimmed}{CHAT_COMPLETIONS_PATH}"),
        }
    }

    /// The endpoint this gateway posts to.
    pub fn endpoint(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

#[async_trait]
impl ContentGateway for DeepSeekGateway {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        let body = ChatRequest {
            model: self.model.as_str(),
            messages: request
                .messages
                .iter()
                .map(WireMessage::from_turn)
                .collect(),
            temperature: request.temperature.value(),
            stream: false,
        };

        debug!(
            model = %self.model,
            messages = body.messages.len(),
            temperature = body.temperature,
            "POST {}",
            self.url
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout(REQUEST_TIMEOUT_SECS)
                } else {
                    GatewayError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!("DeepSeek API returned {status}: {body_text}");
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        parsed.into_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway = DeepSeekGateway::new("sk-test", Model::default(), DEFAULT_BASE_URL);
        assert_eq!(gateway.endpoint(), "https://api.deepseek.com/chat/completions");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let gateway = DeepSeekGateway::new("sk-test", Model::default(), "http://localhost:8080/");
        assert_eq!(gateway.endpoint(), "http://localhost:8080/chat/completions");
    }

    #[test]
    fn test_gateway_keeps_configured_model() {
        let gateway = DeepSeekGateway::new(
            "sk-test",
            "deepseek-reasoner".parse().unwrap(),
            DEFAULT_BASE_URL,
        );
        assert_eq!(gateway.model(), &Model::DeepSeekReasoner);
    }
}
