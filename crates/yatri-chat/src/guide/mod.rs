//! Voice guide: spoken-command parsing and section navigation for a
//! selected destination. Produces the text to speak; audio I/O belongs to
//! the client.

mod command;
mod script;
mod spots;

#[cfg(test)]
mod tests;

pub use command::VoiceCommand;
pub use script::{GuideScript, Section};
pub use spots::{find_spot, TouristSpot, SPOTS};

use tracing::debug;

pub const ASK_WHICH_PLACE: &str = "Which place would you like to know about?";
pub const SELECT_FIRST: &str = "Please select a destination first.";
pub const NOT_UNDERSTOOD: &str =
    "I didn't understand that command. Try saying 'tell me about Netarhat' or 'start guide'.";

/// Playback state for one listener.
pub struct GuideSession<'a> {
    spots: &'a [TouristSpot],
    selected: Option<(&'a TouristSpot, GuideScript)>,
    index: usize,
    playing: bool,
}

impl<'a> GuideSession<'a> {
    pub fn new(spots: &'a [TouristSpot]) -> Self {
        Self {
            spots,
            selected: None,
            index: 0,
            playing: false,
        }
    }

    /// Select a spot without starting playback.
    pub fn select(&mut self, spot: &'a TouristSpot) {
        self.selected = Some((spot, GuideScript::for_spot(spot)));
        self.index = 0;
    }

    pub fn selected(&self) -> Option<&'a TouristSpot> {
        self.selected.as_ref().map(|(spot, _)| *spot)
    }

    pub fn current_section(&self) -> Section {
        Section::ALL[self.index]
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Parse and apply a speech transcript.
    pub fn handle(&mut self, transcript: &str) -> Option<String> {
        let command = VoiceCommand::parse(transcript, self.spots);
        debug!("guide: {transcript:?} -> {command:?}");
        self.apply(command)
    }

    /// Apply a command and return the text to speak, if any.
    pub fn apply(&mut self, command: VoiceCommand<'a>) -> Option<String> {
        match command {
            VoiceCommand::Describe(spot) => {
                self.select(spot);
                self.start()
            }
            VoiceCommand::DescribeUnknown => Some(ASK_WHICH_PLACE.to_string()),
            VoiceCommand::StartGuide => match self.selected {
                Some(_) => {
                    self.index = 0;
                    self.start()
                }
                None => Some(SELECT_FIRST.to_string()),
            },
            VoiceCommand::Next => self.step(1),
            VoiceCommand::Previous => self.step(Section::ALL.len() - 1),
            VoiceCommand::Repeat => self.speak_current(),
            VoiceCommand::Stop => {
                self.playing = false;
                None
            }
            VoiceCommand::Unknown => Some(NOT_UNDERSTOOD.to_string()),
        }
    }

    fn start(&mut self) -> Option<String> {
        self.playing = true;
        self.speak_current()
    }

    /// Move `by` sections forward, wrapping. No-op without a selection.
    fn step(&mut self, by: usize) -> Option<String> {
        self.selected.as_ref()?;
        self.index = (self.index + by) % Section::ALL.len();
        self.speak_current()
    }

    fn speak_current(&self) -> Option<String> {
        let (_, script) = self.selected.as_ref()?;
        Some(script.section(self.current_section()).to_string())
    }
}
