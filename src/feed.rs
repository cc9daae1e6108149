use serde::Serialize;
use tracing::warn;

use crate::error::ExtractError;

// statsapi omits the batter-specific zone on some pitch events; these are the
// league-standard extents it documents as its own fallback.
const DEFAULT_ZONE_TOP: f64 = 3.5;
const DEFAULT_ZONE_BOTTOM: f64 = 1.5;

/// One game's live feed document, reduced to the parts the pipeline reads.
#[derive(Debug)]
pub struct LiveFeed {
    pub home: TeamRef,
    pub away: TeamRef,
    pub plays: Vec<Play>,
    pub linescore: Option<LineScore>,
}

#[derive(Debug)]
pub struct TeamRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Copy)]
pub struct LineScore {
    pub home_runs: u32,
    pub away_runs: u32,
}

/// One plate appearance from `liveData.plays.allPlays[]`.
#[derive(Debug)]
pub struct Play {
    pub batter_id: u64,
    pub batter_name: String,
    pub pitcher_name: String,
    pub is_top_inning: bool,
    pub inning: u32,
    pub count: Count,
    /// Canonical result token (`single`, `strikeout`, ...); empty while the
    /// plate appearance is still in progress.
    pub event_type: String,
    pub event_label: String,
    pub home_score: u32,
    pub away_score: u32,
    pub pitch_events: Vec<PitchEvent>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Count {
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
}

/// One entry of a play's `playEvents[]`. Non-pitch events (pickoff throws,
/// mound visits) parse fine but are never eligible for location mapping.
#[derive(Debug)]
pub struct PitchEvent {
    pub is_pitch: bool,
    pub description: String,
    pub pitch_type: String,
    pub start_speed: Option<f64>,
    /// Plate-crossing coordinates (pX, pZ), when measured.
    pub plate: Option<(f64, f64)>,
    pub zone_top: f64,
    pub zone_bottom: f64,
}

impl PitchEvent {
    pub fn from_value(value: &serde_json::Value) -> Self {
        let coords = &value["pitchData"]["coordinates"];
        let plate = match (coords["pX"].as_f64(), coords["pZ"].as_f64()) {
            (Some(x), Some(z)) => Some((x, z)),
            _ => None,
        };

        Self {
            is_pitch: value["isPitch"].as_bool().unwrap_or(false),
            description: value["details"]["description"].as_str().unwrap_or("").to_string(),
            pitch_type: value["details"]["type"]["description"].as_str().unwrap_or("").to_string(),
            start_speed: value["pitchData"]["startSpeed"].as_f64(),
            plate,
            zone_top: value["pitchData"]["strikeZoneTop"].as_f64().unwrap_or(DEFAULT_ZONE_TOP),
            zone_bottom: value["pitchData"]["strikeZoneBottom"].as_f64().unwrap_or(DEFAULT_ZONE_BOTTOM),
        }
    }

    /// Whether this event can be placed on the location grid.
    pub fn has_location(&self) -> bool {
        self.is_pitch && self.plate.is_some()
    }
}

impl Play {
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ExtractError> {
        let batter_id = match value["matchup"]["batter"]["id"].as_u64() {
            Some(id) => id,
            None => return Err(ExtractError::MalformedFeed("matchup.batter.id")),
        };
        let batter_name = match value["matchup"]["batter"]["fullName"].as_str() {
            Some(name) => name.to_string(),
            None => return Err(ExtractError::MalformedFeed("matchup.batter.fullName")),
        };
        let pitcher_name = match value["matchup"]["pitcher"]["fullName"].as_str() {
            Some(name) => name.to_string(),
            None => return Err(ExtractError::MalformedFeed("matchup.pitcher.fullName")),
        };
        let inning = match value["about"]["inning"].as_u64() {
            Some(inning) => inning as u32,
            None => return Err(ExtractError::MalformedFeed("about.inning")),
        };

        let count = Count {
            balls: value["count"]["balls"].as_u64().unwrap_or(0) as u8,
            strikes: value["count"]["strikes"].as_u64().unwrap_or(0) as u8,
            outs: value["count"]["outs"].as_u64().unwrap_or(0) as u8,
        };

        let pitch_events = value["playEvents"]
            .as_array()
            .map(|events| events.iter().map(PitchEvent::from_value).collect())
            .unwrap_or_default();

        Ok(Self {
            batter_id,
            batter_name,
            pitcher_name,
            is_top_inning: value["about"]["isTopInning"].as_bool().unwrap_or(true),
            inning,
            count,
            event_type: value["result"]["eventType"].as_str().unwrap_or("").to_string(),
            event_label: value["result"]["event"].as_str().unwrap_or("").to_string(),
            home_score: value["result"]["homeScore"].as_u64().unwrap_or(0) as u32,
            away_score: value["result"]["awayScore"].as_u64().unwrap_or(0) as u32,
            pitch_events,
        })
    }
}

fn team_ref_from_value(value: &serde_json::Value) -> Result<TeamRef, ExtractError> {
    let id = match value["id"].as_u64() {
        Some(id) => id,
        None => return Err(ExtractError::MalformedFeed("gameData.teams")),
    };
    let name = value["name"].as_str().unwrap_or("").to_string();

    Ok(TeamRef { id, name })
}

impl LiveFeed {
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ExtractError> {
        let home = team_ref_from_value(&value["gameData"]["teams"]["home"])?;
        let away = team_ref_from_value(&value["gameData"]["teams"]["away"])?;

        let all_plays = match value["liveData"]["plays"]["allPlays"].as_array() {
            Some(plays) => plays,
            None => return Err(ExtractError::MalformedFeed("liveData.plays.allPlays")),
        };

        let mut plays = Vec::with_capacity(all_plays.len());
        for (i, play_value) in all_plays.iter().enumerate() {
            match Play::from_value(play_value) {
                Ok(play) => plays.push(play),
                Err(err) => warn!("skipping play {i}: {err}"),
            }
        }

        let linescore_teams = &value["liveData"]["linescore"]["teams"];
        let linescore = match (
            linescore_teams["home"]["runs"].as_u64(),
            linescore_teams["away"]["runs"].as_u64(),
        ) {
            (Some(home_runs), Some(away_runs)) => Some(LineScore {
                home_runs: home_runs as u32,
                away_runs: away_runs as u32,
            }),
            _ => None,
        };

        Ok(Self {
            home,
            away,
            plays,
            linescore,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_feed() -> serde_json::Value {
        json!({
            "gameData": {
                "teams": {
                    "home": { "id": 119, "name": "Los Angeles Dodgers" },
                    "away": { "id": 137, "name": "San Francisco Giants" },
                }
            },
            "liveData": {
                "plays": {
                    "allPlays": [
                        {
                            "matchup": {
                                "batter": { "id": 660271, "fullName": "Shohei Ohtani" },
                                "pitcher": { "fullName": "Logan Webb" },
                            },
                            "about": { "isTopInning": false, "inning": 3 },
                            "count": { "balls": 1, "strikes": 2, "outs": 0 },
                            "result": {
                                "eventType": "strikeout",
                                "event": "Strikeout",
                                "homeScore": 2,
                                "awayScore": 1,
                            },
                            "playEvents": [
                                {
                                    "isPitch": true,
                                    "details": {
                                        "description": "Called Strike",
                                        "type": { "description": "Four-Seam Fastball" },
                                    },
                                    "pitchData": {
                                        "startSpeed": 94.2,
                                        "strikeZoneTop": 3.4,
                                        "strikeZoneBottom": 1.6,
                                        "coordinates": { "pX": 0.31, "pZ": 2.4 },
                                    },
                                },
                            ],
                        },
                    ],
                },
                "linescore": {
                    "teams": {
                        "home": { "runs": 2 },
                        "away": { "runs": 1 },
                    }
                },
            },
        })
    }

    #[test]
    fn parses_a_minimal_document() {
        let feed = LiveFeed::from_value(&minimal_feed()).unwrap();
        assert_eq!(feed.home.id, 119);
        assert_eq!(feed.away.name, "San Francisco Giants");
        assert_eq!(feed.plays.len(), 1);

        let play = &feed.plays[0];
        assert_eq!(play.batter_id, 660271);
        assert_eq!(play.event_type, "strikeout");
        assert_eq!(play.count.strikes, 2);
        assert!(play.pitch_events[0].has_location());
        assert_eq!(play.pitch_events[0].start_speed, Some(94.2));

        let linescore = feed.linescore.unwrap();
        assert_eq!(linescore.home_runs, 2);
        assert_eq!(linescore.away_runs, 1);
    }

    #[test]
    fn document_without_plays_is_malformed() {
        let doc = json!({
            "gameData": {
                "teams": {
                    "home": { "id": 119, "name": "Los Angeles Dodgers" },
                    "away": { "id": 137, "name": "San Francisco Giants" },
                }
            },
            "liveData": {},
        });
        assert_eq!(
            LiveFeed::from_value(&doc).unwrap_err(),
            ExtractError::MalformedFeed("liveData.plays.allPlays"),
        );
    }

    #[test]
    fn play_without_matchup_is_skipped_not_fatal() {
        let mut doc = minimal_feed();
        doc["liveData"]["plays"]["allPlays"]
            .as_array_mut()
            .unwrap()
            .insert(0, json!({ "about": { "inning": 1 } }));

        let feed = LiveFeed::from_value(&doc).unwrap();
        assert_eq!(feed.plays.len(), 1);
        assert_eq!(feed.plays[0].batter_name, "Shohei Ohtani");
    }

    #[test]
    fn missing_zone_extents_fall_back_to_league_defaults() {
        let event = PitchEvent::from_value(&json!({
            "isPitch": true,
            "details": { "description": "Ball" },
            "pitchData": { "coordinates": { "pX": -0.2, "pZ": 1.0 } },
        }));
        assert_eq!(event.zone_top, 3.5);
        assert_eq!(event.zone_bottom, 1.5);
        assert!(event.has_location());
    }

    #[test]
    fn non_pitch_event_is_never_locatable() {
        let event = PitchEvent::from_value(&json!({
            "isPitch": false,
            "details": { "description": "Pickoff Attempt 1B" },
            "pitchData": { "coordinates": { "pX": 0.0, "pZ": 2.0 } },
        }));
        assert!(!event.has_location());
    }
}
