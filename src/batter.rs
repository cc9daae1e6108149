use std::fmt;

use crate::feed::Play;

/// Result tokens that count as an official at-bat. Walks, hit-by-pitch and
/// sacrifices are deliberately absent, matching how batting average is scored.
const AT_BAT_EVENTS: [&str; 8] = [
    "single",
    "double",
    "triple",
    "home_run",
    "field_out",
    "grounded_into_double_play",
    "force_out",
    "strikeout",
];

const HIT_EVENTS: [&str; 4] = ["single", "double", "triple", "home_run"];

/// Same-game rolling line for one batter, built fresh from each feed document.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatterLine {
    pub at_bats: u32,
    pub hits: u32,
    pub last_outcome: Option<String>,
}

/// Tally the batter's at-bats and hits across the whole play list, in order.
/// `last_outcome` holds the label of the most recent at-bat-qualifying play;
/// non-qualifying plays (walks etc.) never overwrite it.
pub fn rolling_line(plays: &[Play], batter_id: u64) -> BatterLine {
    let mut line = BatterLine::default();

    for play in plays {
        if play.batter_id != batter_id {
            continue;
        }
        if !AT_BAT_EVENTS.contains(&play.event_type.as_str()) {
            continue;
        }

        line.at_bats += 1;
        if HIT_EVENTS.contains(&play.event_type.as_str()) {
            line.hits += 1;
        }
        line.last_outcome = Some(play.event_label.to_lowercase());
    }

    line
}

impl fmt::Display for BatterLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-for-{}", self.hits, self.at_bats)?;
        if let Some(outcome) = &self.last_outcome {
            write!(f, ", {outcome}")?;
        }
        Ok(())
    }
}
