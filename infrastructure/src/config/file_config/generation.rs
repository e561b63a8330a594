//! Generation defaults from TOML (`[generation]` section)

use serde::{Deserialize, Serialize};
use wayfarer_domain::{ContentCategory, DomainError, Temperature};

/// Raw generation defaults from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Sampling temperature (0 = rigorous, 1 = creative)
    pub temperature: f32,
    /// Initial content category identifier
    pub category: String,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            category: ContentCategory::default().as_str().to_string(),
        }
    }
}

impl FileGenerationConfig {
    pub fn parse_temperature(&self) -> Result<Temperature, DomainError> {
        Temperature::new(self.temperature)
    }

    pub fn parse_category(&self) -> Result<ContentCategory, DomainError> {
        self.category.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = FileGenerationConfig::default();
        assert_eq!(config.parse_temperature().unwrap().value(), 0.7);
        assert_eq!(config.parse_category().unwrap(), ContentCategory::default());
    }

    #[test]
    fn test_out_of_range_temperature_is_rejected() {
        let config = FileGenerationConfig {
            temperature: 1.5,
            ..Default::default()
        };
        assert!(config.parse_temperature().is_err());
    }

    #[test]
    fn test_bad_category_is_rejected_with_hint() {
        let config = FileGenerationConfig {
            category: "scenic-spots".to_string(),
            ..Default::default()
        };
        let err = config.parse_category().unwrap_err();
        assert!(err.to_string().contains("scenic-spots"));
    }
}
