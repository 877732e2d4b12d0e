use super::spots::{find_spot, TouristSpot};

/// A recognized spoken command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoiceCommand<'a> {
    /// "tell me about X" / "describe X" for a known spot.
    Describe(&'a TouristSpot),
    /// "tell me about ..." naming no known spot.
    DescribeUnknown,
    Next,
    Previous,
    Stop,
    Repeat,
    StartGuide,
    Unknown,
}

impl<'a> VoiceCommand<'a> {
    /// Parse a speech transcript. Checks run in a fixed order, so
    /// "stop and go back" is `Previous`.
    pub fn parse(transcript: &str, spots: &'a [TouristSpot]) -> Self {
        let cmd = transcript.trim().to_lowercase();
        let has = |kw: &str| cmd.contains(kw);

        if has("tell me about") || has("describe") {
            match find_spot(spots, &cmd) {
                Some(spot) => Self::Describe(spot),
                None => Self::DescribeUnknown,
            }
        } else if has("next") || has("continue") {
            Self::Next
        } else if has("previous") || has("back") {
            Self::Previous
        } else if has("stop") || has("pause") {
            Self::Stop
        } else if has("repeat") {
            Self::Repeat
        } else if has("start guide") {
            Self::StartGuide
        } else {
            Self::Unknown
        }
    }
}
