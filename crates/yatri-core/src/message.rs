use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single entry in a chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// 1-based position in the transcript.
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub language: Language,
    pub timestamp: DateTime<Utc>,
}

/// Append-only, ordered list of exchanged messages.
///
/// Messages can only be added through [`Transcript::append`]; ids are
/// assigned sequentially so that `id == position + 1` always holds.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new message and return a reference to it.
    pub fn append(&mut self, sender: Sender, text: impl Into<String>, language: Language) -> &Message {
        let id = self.messages.len() as u64 + 1;
        self.messages.push(Message {
            id,
            sender,
            text: text.into(),
            language,
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }
}
