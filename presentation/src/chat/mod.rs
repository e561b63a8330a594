//! Interactive chat module
//!
//! Provides a readline-based conversational interface with slash commands
//! for category selection, temperature, transcript re-display, and reset.

mod repl;

pub use repl::ChatRepl;
