//! Model value object representing a chat-completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available chat-completion models (Value Object)
///
/// The adapter sends the string identifier verbatim, so unknown identifiers
/// are carried through as [`Model::Custom`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// General-purpose chat model (default)
    DeepSeekChat,
    /// Reasoning-tuned model
    DeepSeekReasoner,
    /// Any other identifier, passed through unchanged
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::DeepSeekChat => "deepseek-chat",
            Model::DeepSeekReasoner => "deepseek-reasoner",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (deepseek-chat)
    fn default() -> Self {
        Model::DeepSeekChat
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "deepseek-chat" => Model::DeepSeekChat,
            "deepseek-reasoner" => Model::DeepSeekReasoner,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::DeepSeekChat, Model::DeepSeekReasoner] {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "some-future-model".parse().unwrap();
        assert_eq!(model, Model::Custom("some-future-model".to_string()));
        assert_eq!(model.to_string(), "some-future-model");
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::DeepSeekChat);
        assert_eq!(Model::default().as_str(), "deepseek-chat");
    }

    #[test]
    fn test_model_serializes_as_string() {
        let json = serde_json::to_string(&Model::DeepSeekChat).unwrap();
        assert_eq!(json, "\"deepseek-chat\"");
    }
}
