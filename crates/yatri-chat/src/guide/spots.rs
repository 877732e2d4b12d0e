use serde::Serialize;

/// A destination the voice guide can narrate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristSpot {
    pub id: u32,
    pub name: &'static str,
    /// Short spoken names, matched as whole words.
    #[serde(skip)]
    pub aliases: &'static [&'static str],
    pub category: &'static str,
    pub rating: f32,
    /// `[lat, lon]`.
    pub coordinates: [f64; 2],
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub difficulty: &'static str,
    pub time_required: &'static str,
    pub best_time: &'static str,
}

pub const SPOTS: &[TouristSpot] = &[
    TouristSpot {
        id: 1,
        name: "Netarhat Hill Station",
        aliases: &["netarhat"],
        category: "Hill Station",
        rating: 4.8,
        coordinates: [23.4691, 84.2617],
        description: "Queen of Chotanagpur plateau, famous for sunrise and sunset views",
        highlights: &["Sunrise Point", "Sunset Point", "Tribal Villages"],
        difficulty: "Easy",
        time_required: "1-2 days",
        best_time: "October to March",
    },
    TouristSpot {
        id: 2,
        name: "Betla National Park",
        aliases: &["betla"],
        category: "Wildlife",
        rating: 4.6,
        coordinates: [23.8644, 84.1922],
        description: "Tiger reserve and wildlife sanctuary with diverse flora and fauna",
        highlights: &["Tiger Safari", "Palamau Fort", "Bird Watching"],
        difficulty: "Moderate",
        time_required: "1 day",
        best_time: "November to April",
    },
    TouristSpot {
        id: 3,
        name: "Hundru Falls",
        aliases: &["hundru"],
        category: "Waterfall",
        rating: 4.5,
        coordinates: [23.4255, 85.5897],
        description: "Beautiful 320-foot waterfall near Ranchi",
        highlights: &["Photography", "Trekking", "Swimming"],
        difficulty: "Easy",
        time_required: "Half day",
        best_time: "July to November",
    },
    TouristSpot {
        id: 4,
        name: "Tribal Cultural Center",
        aliases: &["cultural center"],
        category: "Cultural",
        rating: 4.7,
        coordinates: [23.3441, 85.3096],
        description: "Museum showcasing rich tribal heritage and traditions",
        highlights: &["Artifacts", "Folk Dance", "Handicrafts"],
        difficulty: "Easy",
        time_required: "2-3 hours",
        best_time: "Year round",
    },
];

/// Find a spot whose full name or one of its aliases occurs as whole
/// words in the lowercased text. "tell me about netarhat" finds
/// "Netarhat Hill Station"; "tribal dance" finds nothing.
pub fn find_spot<'a>(spots: &'a [TouristSpot], text_lower: &str) -> Option<&'a TouristSpot> {
    spots.iter().find(|spot| {
        contains_phrase(text_lower, &spot.name.to_lowercase())
            || spot
                .aliases
                .iter()
                .any(|alias| contains_phrase(text_lower, alias))
    })
}

/// `phrase` occurs in `text` with no letter or digit directly on either side.
fn contains_phrase(text: &str, phrase: &str) -> bool {
    text.match_indices(phrase).any(|(i, _)| {
        let before = text[..i].chars().next_back();
        let after = text[i + phrase.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
