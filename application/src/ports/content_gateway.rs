//! Content gateway port
//!
//! Defines the interface for the external chat-completion service.

use async_trait::async_trait;
use thiserror::Error;
use wayfarer_domain::GenerationRequest;

/// Errors that can occur during a generation call
///
/// `generate` makes exactly one attempt; every failure mode surfaces here
/// as a typed value. Collapsing these into a display string is the
/// presentation layer's job, never the gateway's.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("API returned HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response contained no choices")]
    EmptyChoices,
}

/// Gateway for chat-completion generation
///
/// This port defines how the application layer reaches the external model.
/// Implementations (adapters) live in the infrastructure layer and hold the
/// caller's credential for the duration of their lifetime; they keep no
/// other state across calls.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Perform one synchronous round trip: the full message sequence goes
    /// out, the generated text (whitespace-trimmed) comes back. No retry,
    /// no streaming, exactly one attempt per call.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError>;
}
