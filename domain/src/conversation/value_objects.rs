//! Conversation value objects

use crate::conversation::entities::Turn;
use crate::core::error::DomainError;

/// Sampling temperature in `[0.0, 1.0]` (Value Object)
///
/// 0.0 keeps the output rigorous, 1.0 lets it get creative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature(f32);

impl Temperature {
    /// Create a validated temperature
    pub fn new(value: f32) -> Result<Self, DomainError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::TemperatureOutOfRange(value))
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    /// Returns the default temperature (0.7)
    fn default() -> Self {
        Self(0.7)
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// One outgoing request to the chat-completion service (Value Object)
///
/// Constructed fresh per call and never persisted. The message sequence is
/// the full conversation snapshot plus the composed user turn for this round.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub messages: Vec<Turn>,
    pub temperature: Temperature,
}

impl GenerationRequest {
    pub fn new(messages: Vec<Turn>, temperature: Temperature) -> Self {
        Self {
            messages,
            temperature,
        }
    }
}
