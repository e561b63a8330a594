//! Generation parameters — per-session defaults.
//!
//! [`GenerationParams`] groups the knobs the surrounding interface exposes
//! for a session: the initial content category and the sampling temperature.
//! These are application-layer concerns, not domain policy.

use wayfarer_domain::{ContentCategory, Temperature};

/// Session-level generation defaults.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Category used to compose the first turn.
    pub category: ContentCategory,
    /// Sampling temperature for every request in the session.
    pub temperature: Temperature,
}

impl GenerationParams {
    pub fn with_category(mut self, category: ContentCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = temperature;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = GenerationParams::default();
        assert_eq!(params.category, ContentCategory::AttractionGuide);
        assert_eq!(params.temperature.value(), 0.7);
    }

    #[test]
    fn test_builder() {
        let params = GenerationParams::default()
            .with_category(ContentCategory::GearChecklist)
            .with_temperature(Temperature::new(0.2).unwrap());
        assert_eq!(params.category, ContentCategory::GearChecklist);
        assert_eq!(params.temperature.value(), 0.2);
    }
}
