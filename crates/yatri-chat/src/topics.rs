//! Topic buckets and keyword matching.

use serde::{Deserialize, Serialize};
use yatri_core::language::Language;

use crate::keywords::*;

/// A predefined subject the assistant has canned answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Reach,
    Handicrafts,
    Festivals,
    Itinerary,
    Culture,
    Places,
}

impl Topic {
    /// Matching order. The first topic with a keyword hit wins.
    pub const ALL: [Topic; 6] = [
        Topic::Reach,
        Topic::Handicrafts,
        Topic::Festivals,
        Topic::Itinerary,
        Topic::Culture,
        Topic::Places,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Reach => "reach",
            Self::Handicrafts => "handicrafts",
            Self::Festivals => "festivals",
            Self::Itinerary => "itinerary",
            Self::Culture => "culture",
            Self::Places => "places",
        }
    }

    /// Keywords for this topic written in `lang`. Empty when the language
    /// has no native list for the topic.
    pub fn keywords(&self, lang: Language) -> &'static [&'static str] {
        match (self, lang) {
            (Self::Reach, Language::English) => REACH_EN,
            (Self::Reach, Language::Hindi) => REACH_HI,
            (Self::Reach, Language::Bengali) => REACH_BN,
            (Self::Reach, Language::Urdu) => REACH_UR,
            (Self::Reach, Language::Odia) => REACH_OR,

            (Self::Handicrafts, Language::English) => HANDICRAFTS_EN,
            (Self::Handicrafts, Language::Hindi) => HANDICRAFTS_HI,
            (Self::Handicrafts, Language::Bengali) => HANDICRAFTS_BN,
            (Self::Handicrafts, Language::Urdu) => HANDICRAFTS_UR,
            (Self::Handicrafts, Language::Odia) => HANDICRAFTS_OR,

            (Self::Festivals, Language::English) => FESTIVALS_EN,
            (Self::Festivals, Language::Hindi) => FESTIVALS_HI,
            (Self::Festivals, Language::Bengali) => FESTIVALS_BN,
            (Self::Festivals, Language::Santali) => FESTIVALS_SAT,
            (Self::Festivals, Language::Urdu) => FESTIVALS_UR,
            (Self::Festivals, Language::Odia) => FESTIVALS_OR,

            (Self::Itinerary, Language::English) => ITINERARY_EN,
            (Self::Itinerary, Language::Hindi) => ITINERARY_HI,
            (Self::Itinerary, Language::Bengali) => ITINERARY_BN,
            (Self::Itinerary, Language::Urdu) => ITINERARY_UR,
            (Self::Itinerary, Language::Odia) => ITINERARY_OR,

            (Self::Culture, Language::English) => CULTURE_EN,
            (Self::Culture, Language::Hindi) => CULTURE_HI,
            (Self::Culture, Language::Bengali) => CULTURE_BN,
            (Self::Culture, Language::Urdu) => CULTURE_UR,
            (Self::Culture, Language::Odia) => CULTURE_OR,

            (Self::Places, Language::English) => PLACES_EN,
            (Self::Places, Language::Hindi) => PLACES_HI,
            (Self::Places, Language::Bengali) => PLACES_BN,
            (Self::Places, Language::Urdu) => PLACES_UR,
            (Self::Places, Language::Odia) => PLACES_OR,

            _ => &[],
        }
    }

    /// True if the lowercased message hits this topic's keywords in `lang`
    /// or in English.
    fn hits(&self, msg_lower: &str, lang: Language) -> bool {
        kw_match(msg_lower, self.keywords(lang))
            || (lang != Language::English && kw_match(msg_lower, self.keywords(Language::English)))
    }
}

/// Check if any keyword in the list is contained in the lowercased message.
fn kw_match(msg_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| msg_lower.contains(kw))
}

/// Find the topic a message is about.
///
/// Scans [`Topic::ALL`] in order and returns the first topic whose keywords
/// (in `lang` or English) occur in the lowercased text.
pub fn match_topic(text: &str, lang: Language) -> Option<Topic> {
    let lower = text.to_lowercase();
    Topic::ALL.into_iter().find(|topic| topic.hits(&lower, lang))
}
