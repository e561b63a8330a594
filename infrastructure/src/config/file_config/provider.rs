//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};
use wayfarer_domain::Model;

/// Chat-completion provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "DEEPSEEK_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "DEEPSEEK_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.deepseek.com".to_string(),
            model: "deepseek-chat".to_string(),
        }
    }
}

impl FileProviderConfig {
    /// Parse the configured model identifier (never fails; unknown
    /// identifiers pass through as custom models).
    pub fn parse_model(&self) -> Model {
        self.model.parse().unwrap()
    }

    /// Resolve the credential: a directly configured key wins, otherwise
    /// the environment variable named by `api_key_env` is consulted.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model() {
        let config = FileProviderConfig::default();
        assert_eq!(config.parse_model(), Model::DeepSeekChat);
    }

    #[test]
    fn test_direct_api_key_wins() {
        let config = FileProviderConfig {
            api_key: Some("sk-direct".to_string()),
            // An env var name that will not exist in any test environment
            api_key_env: "WAYFARER_TEST_NO_SUCH_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("sk-direct".to_string()));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = FileProviderConfig {
            api_key: Some("   ".to_string()),
            api_key_env: "WAYFARER_TEST_NO_SUCH_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
