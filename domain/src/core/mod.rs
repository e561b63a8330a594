//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — available chat-completion models
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
