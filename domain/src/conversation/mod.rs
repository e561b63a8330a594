//! Conversation domain.
//!
//! - [`entities::Conversation`] — the ordered turn history for one session
//! - [`entities::Turn`] — a single message, tagged with its role
//! - [`value_objects::GenerationRequest`] — one outgoing request to the model
//! - [`value_objects::Temperature`] — validated sampling temperature

pub mod entities;
pub mod value_objects;
