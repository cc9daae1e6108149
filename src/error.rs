use thiserror::Error;

/// Everything that can stop a snapshot from being produced. All of these are
/// recoverable at the request boundary: the serving layer turns them into a
/// "no snapshot available" body with `reason()` as the code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no live game for this team")]
    NoLiveGame,

    #[error("feed document is missing {0}")]
    MalformedFeed(&'static str),

    #[error("no play in the feed carries pitch coordinates")]
    NoPitchData,

    #[error("strike zone top equals bottom, cannot normalize pitch height")]
    DegenerateZone,

    #[error("unrecognized pitch type phrase: {0:?}")]
    UnknownPitchType(String),

    #[error("unrecognized pitch outcome phrase: {0:?}")]
    UnknownOutcome(String),
}

impl ExtractError {
    /// Stable code for the serving layer. A malformed document is reported the
    /// same as missing pitch data: either way there is nothing to display.
    pub fn reason(&self) -> &'static str {
        match self {
            ExtractError::NoLiveGame => "no_live_game",
            ExtractError::MalformedFeed(_) | ExtractError::NoPitchData => "no_pitch_data",
            ExtractError::DegenerateZone => "degenerate_zone",
            ExtractError::UnknownPitchType(_) => "unknown_pitch_type",
            ExtractError::UnknownOutcome(_) => "unknown_outcome",
        }
    }
}
