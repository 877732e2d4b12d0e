//! A single chat conversation: transcript plus selected language.

use std::time::Duration;

use tracing::info;
use yatri_core::config::ChatConfig;
use yatri_core::language::Language;
use yatri_core::message::{Message, Sender, Transcript};

use crate::dispatch::dispatch;
use crate::responses;

/// Suggested prompts offered next to the chat input.
pub const QUICK_QUESTIONS: [&str; 6] = [
    "What are the best places to visit in Jharkhand?",
    "How do I reach Netarhat from Ranchi?",
    "Tell me about tribal culture in Jharkhand",
    "What are the popular festivals here?",
    "Suggest a 3-day itinerary",
    "Where can I buy authentic handicrafts?",
];

pub struct ChatSession {
    transcript: Transcript,
    language: Language,
    typing_delay: Duration,
}

impl ChatSession {
    /// Start a session. The transcript opens with the welcome message.
    pub fn new(language: Language, typing_delay: Duration) -> Self {
        let mut transcript = Transcript::new();
        transcript.append(
            Sender::Assistant,
            responses::builtin().welcome(language),
            language,
        );
        Self {
            transcript,
            language,
            typing_delay,
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(
            config.default_language,
            Duration::from_millis(config.typing_delay_ms),
        )
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if language != self.language {
            info!("chat: language set to {}", language.code());
        }
        self.language = language;
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Send a user message and wait for the assistant's reply.
    ///
    /// Blank input is ignored and returns `None` without touching the
    /// transcript.
    pub async fn send(&mut self, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }

        self.transcript.append(Sender::User, text, self.language);

        if !self.typing_delay.is_zero() {
            tokio::time::sleep(self.typing_delay).await;
        }

        let reply = dispatch(text, self.language);
        Some(
            self.transcript
                .append(Sender::Assistant, reply.text, reply.language),
        )
    }
}
