//! Content categories and their instruction templates.
//!
//! Each category maps to a fixed natural-language instruction that is
//! prepended to the user's request when composing the **first** turn of a
//! conversation. Follow-up turns are sent verbatim, so the template is never
//! re-seen by the model.

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The eight supported travel-content types (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCategory {
    /// Point-by-point introduction of a single attraction
    AttractionGuide,
    /// Day-by-day itinerary with section headers
    ItineraryPlanning,
    /// Point-by-point answer to a travel question
    TravelQa,
    /// List or table of local specialty foods
    FoodRecommendation,
    /// Point-by-point list of lesser-known sites
    NicheAttractions,
    /// Categorized equipment checklist
    GearChecklist,
    /// Promotional copy with emphasized highlights
    PromotionalCopy,
    /// Ranked list of attractions in a city
    CityRanking,
}

impl ContentCategory {
    /// All categories, in the order the original selection widget listed them
    pub const ALL: [ContentCategory; 8] = [
        ContentCategory::AttractionGuide,
        ContentCategory::ItineraryPlanning,
        ContentCategory::TravelQa,
        ContentCategory::FoodRecommendation,
        ContentCategory::NicheAttractions,
        ContentCategory::GearChecklist,
        ContentCategory::PromotionalCopy,
        ContentCategory::CityRanking,
    ];

    /// Get the string identifier for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::AttractionGuide => "attraction-guide",
            ContentCategory::ItineraryPlanning => "itinerary-planning",
            ContentCategory::TravelQa => "travel-qa",
            ContentCategory::FoodRecommendation => "food-recommendation",
            ContentCategory::NicheAttractions => "niche-attraction-recommendation",
            ContentCategory::GearChecklist => "gear-checklist",
            ContentCategory::PromotionalCopy => "promotional-copywriting",
            ContentCategory::CityRanking => "city-attraction-ranking",
        }
    }

    /// The instruction template prepended to the first user turn
    pub fn prompt_prefix(&self) -> &'static str {
        match self {
            ContentCategory::AttractionGuide => {
                "As a professional travel consultant, introduce the following attraction in detail, point by point in Markdown:"
            }
            ContentCategory::ItineraryPlanning => {
                "Create a detailed itinerary for the following request, one section per day with Markdown headers:"
            }
            ContentCategory::TravelQa => {
                "Answer the following travel question point by point in Markdown:"
            }
            ContentCategory::FoodRecommendation => {
                "Recommend the specialty foods of the following area, as a Markdown list or table:"
            }
            ContentCategory::NicheAttractions => {
                "Recommend lesser-known attractions in the following area, point by point in Markdown:"
            }
            ContentCategory::GearChecklist => {
                "Generate a packing checklist for the following trip, grouped by category under Markdown second-level headers:"
            }
            ContentCategory::PromotionalCopy => {
                "Write promotional copy for the following event, with the highlights emphasized in Markdown bold:"
            }
            ContentCategory::CityRanking => {
                "Generate an attraction ranking for the following city, ordered by popularity with Markdown third-level headers:"
            }
        }
    }

    /// Example request shown as an input placeholder for this category
    pub fn input_hint(&self) -> &'static str {
        match self {
            ContentCategory::AttractionGuide => {
                "e.g. the Forbidden City in Beijing (main sights, tickets, transport)"
            }
            ContentCategory::ItineraryPlanning => {
                "e.g. 3 days in Chengdu (family trip, budget 3000 CNY)"
            }
            ContentCategory::TravelQa => {
                "e.g. which Yunnan attractions suit a traveler with a knee injury?"
            }
            ContentCategory::FoodRecommendation => {
                "e.g. snacks around the Muslim Quarter in Xi'an (nothing spicy)"
            }
            ContentCategory::NicheAttractions => {
                "e.g. quiet low-difficulty hiking spots around Zhejiang"
            }
            ContentCategory::GearChecklist => {
                "e.g. 7 days in Tibet (September, outdoor trekking)"
            }
            ContentCategory::PromotionalCopy => {
                "e.g. autumn photography event at West Lake, Hangzhou"
            }
            ContentCategory::CityRanking => {
                "e.g. top Shanghai attractions (sorted by rating)"
            }
        }
    }
}

impl Default for ContentCategory {
    /// Returns the category the original selection widget started on
    fn default() -> Self {
        ContentCategory::AttractionGuide
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContentCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentCategory::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::UnknownCategory {
                given: s.to_string(),
                valid: ContentCategory::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl Serialize for ContentCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
