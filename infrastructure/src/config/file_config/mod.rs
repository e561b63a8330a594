//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; domain values are parsed out afterwards
//! so a config error surfaces as a readable message, not a serde failure.

mod generation;
mod logging;
mod provider;
mod repl;

pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat-completion provider settings
    pub provider: FileProviderConfig,
    /// Generation defaults (category, temperature)
    pub generation: FileGenerationConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Conversation transcript logging
    pub logging: FileLoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_domain::ContentCategory;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
api_key = "sk-xxxx"
base_url = "http://localhost:8080"
model = "deepseek-reasoner"

[generation]
temperature = 0.3
category = "food-recommendation"

[repl]
show_progress = false

[logging]
conversation_log = "wayfarer.conversation.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.api_key, Some("sk-xxxx".to_string()));
        assert_eq!(config.provider.base_url, "http://localhost:8080");
        assert_eq!(config.provider.model, "deepseek-reasoner");
        assert_eq!(config.generation.temperature, 0.3);
        assert_eq!(
            config.generation.parse_category().unwrap(),
            ContentCategory::FoodRecommendation
        );
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.logging.conversation_log,
            Some("wayfarer.conversation.jsonl".to_string())
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[generation]
temperature = 0.9
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generation.temperature, 0.9);
        // Defaults should apply
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.provider.api_key_env, "DEEPSEEK_API_KEY");
        assert_eq!(config.provider.model, "deepseek-chat");
        assert!(config.repl.show_progress);
        assert!(config.logging.conversation_log.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.provider.base_url, "https://api.deepseek.com");
        assert_eq!(config.generation.temperature, 0.7);
        assert_eq!(config.generation.category, "attraction-guide");
        assert!(config.repl.history_file.is_none());
    }
}
