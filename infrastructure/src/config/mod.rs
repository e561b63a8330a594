//! Configuration loading (TOML files merged via figment)

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileConfig, FileGenerationConfig, FileLoggingConfig, FileProviderConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
