//! detect → match → lookup.

use serde::Serialize;
use tracing::debug;
use yatri_core::language::{detect_language, Language};

use crate::responses::{self, ResponseTable};
use crate::topics::{match_topic, Topic};

/// Outcome of dispatching one user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Matched topic, `None` when the generic fallback was used.
    pub topic: Option<Topic>,
    /// Language the reply is written for.
    pub language: Language,
    pub text: &'static str,
}

/// Language to answer in: the script of the message when it is not the
/// default script, otherwise the language the user selected.
pub fn effective_language(text: &str, selected: Language) -> Language {
    match detect_language(text) {
        lang if lang != Language::default() => lang,
        _ => selected,
    }
}

/// Dispatch against a specific table.
pub fn dispatch_with(table: &ResponseTable, text: &str, selected: Language) -> Reply {
    let language = effective_language(text, selected);
    let topic = match_topic(text, language);
    debug!(
        "dispatch: lang={} topic={}",
        language.code(),
        topic.map_or("none", |t| t.key())
    );
    Reply {
        topic,
        language,
        text: table.resolve(topic, language),
    }
}

/// Dispatch against the built-in response table.
pub fn dispatch(text: &str, selected: Language) -> Reply {
    dispatch_with(responses::builtin(), text, selected)
}
