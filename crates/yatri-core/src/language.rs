//! Supported chat languages and the script patterns used to detect them.
//!
//! The set is closed: English (default), Hindi, Bengali, Santali, Urdu and
//! Odia. Detection is purely script based, so languages sharing a script
//! with a higher-priority entry can never be detected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// A language the assistant can converse in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "sat")]
    Santali,
    #[serde(rename = "ur")]
    Urdu,
    #[serde(rename = "or")]
    Odia,
}

impl Language {
    /// Every supported language, in selector order.
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Santali,
        Language::Urdu,
        Language::Odia,
    ];

    /// Language tag used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Bengali => "bn",
            Self::Santali => "sat",
            Self::Urdu => "ur",
            Self::Odia => "or",
        }
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Bengali => "Bengali",
            Self::Santali => "Santali",
            Self::Urdu => "Urdu",
            Self::Odia => "Odia",
        }
    }

    /// Name of the language written in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "\u{939}\u{93f}\u{902}\u{926}\u{940}",
            Self::Bengali => "\u{9ac}\u{9be}\u{982}\u{9b2}\u{9be}",
            Self::Santali => "\u{1c65}\u{1c5f}\u{1c71}\u{1c5b}\u{1c5f}\u{1c5e}\u{1c64}",
            Self::Urdu => "\u{627}\u{631}\u{62f}\u{648}",
            Self::Odia => "\u{b13}\u{b21}\u{b3c}\u{b3f}\u{b06}",
        }
    }

    /// Parse from a code or English name, case-insensitive.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "hi" | "hin" | "hindi" => Some(Self::Hindi),
            "bn" | "ben" | "bengali" | "bangla" => Some(Self::Bengali),
            "sat" | "santali" | "santhali" => Some(Self::Santali),
            "ur" | "urd" | "urdu" => Some(Self::Urdu),
            "or" | "ori" | "odia" | "oriya" => Some(Self::Odia),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a set of Unicode code-point ranges to a language.
#[derive(Debug, Clone, Copy)]
pub struct LanguagePattern {
    pub language: Language,
    pub ranges: &'static [RangeInclusive<char>],
}

impl LanguagePattern {
    /// True if any letter of `text` falls in one of the pattern's ranges.
    ///
    /// Punctuation and format characters are ignored: the danda (U+0964)
    /// sits in the Devanagari block but ends Bengali and Odia sentences too,
    /// and a byte-order mark sits in the Arabic presentation forms.
    pub fn matches(&self, text: &str) -> bool {
        text.chars()
            .filter(|c| c.is_alphabetic())
            .any(|c| self.ranges.iter().any(|range| range.contains(&c)))
    }
}

/// Detection patterns in priority order. Latin comes last so that
/// code-mixed input ("Netarhat \u{915}\u{948}\u{938}\u{947}") resolves to the
/// native script.
pub const LANGUAGE_PATTERNS: [LanguagePattern; 6] = [
    LanguagePattern {
        language: Language::Santali,
        ranges: &['\u{1c50}'..='\u{1c7f}'],
    },
    LanguagePattern {
        language: Language::Hindi,
        ranges: &['\u{0900}'..='\u{097f}', '\u{a8e0}'..='\u{a8ff}'],
    },
    LanguagePattern {
        language: Language::Bengali,
        ranges: &['\u{0980}'..='\u{09ff}'],
    },
    LanguagePattern {
        language: Language::Odia,
        ranges: &['\u{0b00}'..='\u{0b7f}'],
    },
    LanguagePattern {
        language: Language::Urdu,
        ranges: &[
            '\u{0600}'..='\u{06ff}',
            '\u{0750}'..='\u{077f}',
            '\u{fb50}'..='\u{fdff}',
            '\u{fe70}'..='\u{feff}',
        ],
    },
    LanguagePattern {
        language: Language::English,
        ranges: &['A'..='Z', 'a'..='z'],
    },
];

/// Infer the language of `text` from the scripts it contains.
///
/// Returns the first pattern in [`LANGUAGE_PATTERNS`] with at least one
/// matching character, or [`Language::default`] when none match (digits,
/// punctuation, emoji, empty input).
pub fn detect_language(text: &str) -> Language {
    LANGUAGE_PATTERNS
        .iter()
        .find(|pattern| pattern.matches(text))
        .map(|pattern| pattern.language)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devanagari_is_hindi() {
        assert_eq!(
            detect_language("\u{928}\u{947}\u{924}\u{930}\u{939}\u{93e}\u{91f}"),
            Language::Hindi
        );
        assert_eq!(
            detect_language("\u{915}\u{948}\u{938}\u{947} \u{92a}\u{939}\u{941}\u{901}\u{91a}\u{947}\u{902}?"),
            Language::Hindi
        );
    }

    #[test]
    fn test_latin_is_english() {
        assert_eq!(detect_language("How do I reach Netarhat?"), Language::English);
        assert_eq!(detect_language("Hello, world!"), Language::English);
    }

    #[test]
    fn test_each_script_detected() {
        assert_eq!(detect_language("\u{9ac}\u{9be}\u{982}\u{9b2}\u{9be}"), Language::Bengali);
        assert_eq!(detect_language("\u{1c61}\u{1c5a}\u{1c66}\u{1c5f}\u{1c68}"), Language::Santali);
        assert_eq!(detect_language("\u{627}\u{631}\u{62f}\u{648}"), Language::Urdu);
        assert_eq!(detect_language("\u{b13}\u{b21}\u{b3c}\u{b3f}\u{b06}"), Language::Odia);
    }

    #[test]
    fn test_no_script_falls_back_to_default() {
        assert_eq!(detect_language(""), Language::English);
        assert_eq!(detect_language("123 !?"), Language::English);
        assert_eq!(detect_language("\u{1f3de}\u{fe0f}"), Language::English);
    }

    #[test]
    fn test_native_script_wins_over_latin() {
        // Bengali sentence with an English place name.
        assert_eq!(
            detect_language("Netarhat \u{995}\u{9bf}\u{9ad}\u{9be}\u{9ac}\u{9c7} \u{9af}\u{9be}\u{9ac}?"),
            Language::Bengali
        );
    }

    #[test]
    fn test_danda_does_not_make_bengali_or_odia_hindi() {
        assert_eq!(
            detect_language("\u{99d}\u{9be}\u{9dc}\u{996}\u{9a3}\u{9cd}\u{9a1}\u{9c7}\u{9b0} \u{989}\u{9ce}\u{9b8}\u{9ac}\u{964}"),
            Language::Bengali
        );
        assert_eq!(
            detect_language("\u{b13}\u{b21}\u{b3c}\u{b3f}\u{b06} \u{b2a}\u{b30}\u{b2c}\u{965}"),
            Language::Odia
        );
        assert_eq!(detect_language("\u{964}\u{965}"), Language::English);
    }

    #[test]
    fn test_byte_order_mark_ignored() {
        assert_eq!(
            detect_language("\u{feff}Tell me about Netarhat"),
            Language::English
        );
    }

    #[test]
    fn test_devanagari_vowel_signs_still_count() {
        // Vowel signs are combining marks but carry the Alphabetic property.
        assert_eq!(detect_language("\u{93e}"), Language::Hindi);
    }

    #[test]
    fn test_from_str_loose() {
        assert_eq!(Language::from_str_loose("HI"), Some(Language::Hindi));
        assert_eq!(Language::from_str_loose(" santhali "), Some(Language::Santali));
        assert_eq!(Language::from_str_loose("oriya"), Some(Language::Odia));
        assert_eq!(Language::from_str_loose("klingon"), None);
    }

    #[test]
    fn test_codes_round_trip_through_serde() {
        for lang in Language::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.code()));
            assert_eq!(Language::from_str_loose(lang.code()), Some(lang));
        }
    }
}
