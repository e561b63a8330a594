//! Presentation layer for wayfarer
//!
//! This crate contains CLI definitions, output formatting,
//! the in-flight progress spinner, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::GenerationSpinner;
