//! Infrastructure layer for wayfarer
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGenerationConfig, FileLoggingConfig, FileProviderConfig,
    FileReplConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::deepseek::DeepSeekGateway;
