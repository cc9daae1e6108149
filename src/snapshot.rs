use serde::Serialize;

use crate::batter;
use crate::error::ExtractError;
use crate::feed::{Count, LiveFeed, Play, PitchEvent, TeamRef};
use crate::grid::{self, GridCell};
use crate::vocab;

/// Display-ready extract of one live game, serialized for the serving layer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSnapshot {
    pub pitcher_name: String,
    pub batter_name: String,
    pub pitch_type_display: String,
    pub pitch_outcome_display: String,
    pub raw_pitch_type: String,
    pub raw_outcome: String,
    pub pitch_speed: Option<f64>,
    pub grid_cell: GridCell,
    pub count: Count,
    pub inning: Inning,
    pub score: Score,
    pub batting_average_text: String,
    pub batter_line: String,
    pub team_colors: Sides,
    pub team_names: Sides,
}

#[derive(Debug, Serialize)]
pub struct Inning {
    pub half: &'static str,
    pub number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub away: u32,
    pub home: u32,
}

#[derive(Debug, Serialize)]
pub struct Sides {
    pub home: String,
    pub away: String,
}

/// Find the most recent pitch that carries plate coordinates: plays scanned
/// newest first, events newest first within a play. A play holds several
/// pitches (fouls run the count long), and the last one is "what just
/// happened" on the display.
pub fn current_pitch(plays: &[Play]) -> Option<(&Play, &PitchEvent)> {
    for play in plays.iter().rev() {
        if let Some(event) = play.pitch_events.iter().rev().find(|event| event.has_location()) {
            return Some((play, event));
        }
    }
    None
}

/// The linescore is the authoritative running total when the feed carries one.
/// The play-embedded score only reflects the game as of that play, which lags
/// whenever the selected pitch comes from an older play.
pub fn resolve_score(feed: &LiveFeed, selected: &Play) -> Score {
    match feed.linescore {
        Some(linescore) => Score {
            away: linescore.away_runs,
            home: linescore.home_runs,
        },
        None => Score {
            away: selected.away_score,
            home: selected.home_score,
        },
    }
}

fn display_identity(team: &TeamRef) -> (String, String) {
    match vocab::team_style(team.id) {
        Some(style) => (style.name.to_string(), style.color.to_string()),
        None => {
            let name = if team.name.is_empty() {
                format!("Team {}", team.id)
            } else {
                team.name.clone()
            };
            (name, vocab::NEUTRAL_COLOR.to_string())
        }
    }
}

/// Compose the full snapshot for one feed document. `batting_avg` comes from
/// the season-stats collaborator and is treated as opaque text.
pub fn assemble(feed: &LiveFeed, batting_avg: Option<&str>) -> Result<LiveSnapshot, ExtractError> {
    let (play, pitch) = current_pitch(&feed.plays).ok_or(ExtractError::NoPitchData)?;
    let (plate_x, plate_z) = pitch.plate.ok_or(ExtractError::NoPitchData)?;

    let grid_cell = grid::locate(plate_x, plate_z, pitch.zone_top, pitch.zone_bottom)?;
    let pitch_type_display = vocab::pitch_type_display(&pitch.pitch_type)?;
    let pitch_outcome_display = vocab::outcome_display(&pitch.description)?;

    let (home_name, home_color) = display_identity(&feed.home);
    let (away_name, away_color) = display_identity(&feed.away);

    Ok(LiveSnapshot {
        pitcher_name: play.pitcher_name.clone(),
        batter_name: play.batter_name.clone(),
        pitch_type_display: pitch_type_display.to_string(),
        pitch_outcome_display: pitch_outcome_display.to_string(),
        raw_pitch_type: pitch.pitch_type.clone(),
        raw_outcome: pitch.description.clone(),
        pitch_speed: pitch.start_speed,
        grid_cell,
        count: play.count,
        inning: Inning {
            half: if play.is_top_inning { "top" } else { "bottom" },
            number: play.inning,
        },
        score: resolve_score(feed, play),
        batting_average_text: batting_avg.unwrap_or("N/A").to_string(),
        batter_line: batter::rolling_line(&feed.plays, play.batter_id).to_string(),
        team_colors: Sides {
            home: home_color,
            away: away_color,
        },
        team_names: Sides {
            home: home_name,
            away: away_name,
        },
    })
}
