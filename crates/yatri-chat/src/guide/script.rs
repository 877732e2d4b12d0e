use serde::Serialize;

use super::spots::TouristSpot;

/// Narration sections, in playback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Introduction,
    Highlights,
    PracticalInfo,
    Conclusion,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Introduction,
        Section::Highlights,
        Section::PracticalInfo,
        Section::Conclusion,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::Highlights => "Highlights",
            Self::PracticalInfo => "Practical Info",
            Self::Conclusion => "Conclusion",
        }
    }
}

/// The narration for one spot.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideScript {
    sections: [String; 4],
}

impl GuideScript {
    pub fn for_spot(spot: &TouristSpot) -> Self {
        Self {
            sections: [
                format!(
                    "Welcome to {}, a beautiful {} in Jharkhand. {}",
                    spot.name,
                    spot.category.to_lowercase(),
                    spot.description
                ),
                format!(
                    "The main highlights here include: {}. This place has a {} star rating from visitors.",
                    spot.highlights.join(", "),
                    spot.rating
                ),
                format!(
                    "Best time to visit is {}. You'll need about {} for your visit. The difficulty level is {}.",
                    spot.best_time, spot.time_required, spot.difficulty
                ),
                format!(
                    "That concludes our guide to {}. Enjoy your visit and don't forget to capture some memories!",
                    spot.name
                ),
            ],
        }
    }

    pub fn section(&self, section: Section) -> &str {
        &self.sections[section as usize]
    }
}
