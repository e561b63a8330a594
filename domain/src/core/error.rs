//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Temperature {0} is out of range (expected 0.0..=1.0)")]
    TemperatureOutOfRange(f32),

    #[error("Unknown content category: '{given}' (valid: {valid})")]
    UnknownCategory { given: String, valid: String },
}
