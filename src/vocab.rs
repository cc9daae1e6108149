use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::ExtractError;

/// Color applied to teams the table does not know.
pub const NEUTRAL_COLOR: &str = "#444444";

/// Provider pitch-type phrases mapped to the short labels the display renders.
/// Exact-match only: a phrase missing here is a data-quality error, so the set
/// of supported phrases stays explicit and testable.
static PITCH_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Four-Seam Fastball", "FF"),
        ("Two-Seam Fastball", "FT"),
        ("Sinker", "SI"),
        ("Cutter", "FC"),
        ("Slider", "SL"),
        ("Sweeper", "ST"),
        ("Curveball", "CU"),
        ("Knuckle Curve", "KC"),
        ("Slurve", "SV"),
        ("Changeup", "CH"),
        ("Split-Finger", "FS"),
        ("Forkball", "FO"),
        ("Eephus", "EP"),
        ("Knuckleball", "KN"),
    ])
});

static PITCH_OUTCOMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Ball", "BALL"),
        ("Ball In Dirt", "BALL"),
        ("Automatic Ball", "BALL"),
        ("Called Strike", "STRIKE"),
        ("Automatic Strike", "STRIKE"),
        ("Swinging Strike", "SWING"),
        ("Swinging Strike (Blocked)", "SWING"),
        ("Missed Bunt", "SWING"),
        ("Foul", "FOUL"),
        ("Foul Tip", "FOUL"),
        ("Foul Bunt", "FOUL"),
        ("In play, out(s)", "IN PLAY"),
        ("In play, no out", "IN PLAY"),
        ("In play, run(s)", "IN PLAY"),
        ("Hit By Pitch", "HBP"),
        ("Pitchout", "PITCHOUT"),
    ])
});

#[derive(Debug, Clone, Copy)]
pub struct TeamStyle {
    pub name: &'static str,
    pub color: &'static str,
}

// All 30 statsapi team ids with primary display colors.
static TEAMS: Lazy<HashMap<u64, TeamStyle>> = Lazy::new(|| {
    HashMap::from([
        (108, TeamStyle { name: "Angels", color: "#BA0021" }),
        (109, TeamStyle { name: "D-backs", color: "#A71930" }),
        (110, TeamStyle { name: "Orioles", color: "#DF4601" }),
        (111, TeamStyle { name: "Red Sox", color: "#BD3039" }),
        (112, TeamStyle { name: "Cubs", color: "#0E3386" }),
        (113, TeamStyle { name: "Reds", color: "#C6011F" }),
        (114, TeamStyle { name: "Guardians", color: "#00385D" }),
        (115, TeamStyle { name: "Rockies", color: "#333366" }),
        (116, TeamStyle { name: "Tigers", color: "#0C2340" }),
        (117, TeamStyle { name: "Astros", color: "#EB6E1F" }),
        (118, TeamStyle { name: "Royals", color: "#004687" }),
        (119, TeamStyle { name: "Dodgers", color: "#005A9C" }),
        (120, TeamStyle { name: "Nationals", color: "#AB0003" }),
        (121, TeamStyle { name: "Mets", color: "#FF5910" }),
        (133, TeamStyle { name: "Athletics", color: "#003831" }),
        (134, TeamStyle { name: "Pirates", color: "#FDB827" }),
        (135, TeamStyle { name: "Padres", color: "#2F241D" }),
        (136, TeamStyle { name: "Mariners", color: "#0C2C56" }),
        (137, TeamStyle { name: "Giants", color: "#FD5A1E" }),
        (138, TeamStyle { name: "Cardinals", color: "#C41E3A" }),
        (139, TeamStyle { name: "Rays", color: "#092C5C" }),
        (140, TeamStyle { name: "Rangers", color: "#003278" }),
        (141, TeamStyle { name: "Blue Jays", color: "#134A8E" }),
        (142, TeamStyle { name: "Twins", color: "#002B5C" }),
        (143, TeamStyle { name: "Phillies", color: "#E81828" }),
        (144, TeamStyle { name: "Braves", color: "#CE1141" }),
        (145, TeamStyle { name: "White Sox", color: "#27251F" }),
        (146, TeamStyle { name: "Marlins", color: "#00A3E0" }),
        (147, TeamStyle { name: "Yankees", color: "#003087" }),
        (158, TeamStyle { name: "Brewers", color: "#FFC52F" }),
    ])
});

pub fn pitch_type_display(raw: &str) -> Result<&'static str, ExtractError> {
    PITCH_TYPES
        .get(raw)
        .copied()
        .ok_or_else(|| ExtractError::UnknownPitchType(raw.to_string()))
}

pub fn outcome_display(raw: &str) -> Result<&'static str, ExtractError> {
    PITCH_OUTCOMES
        .get(raw)
        .copied()
        .ok_or_else(|| ExtractError::UnknownOutcome(raw.to_string()))
}

pub fn team_style(team_id: u64) -> Option<TeamStyle> {
    TEAMS.get(&team_id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_phrases() {
        assert_eq!(pitch_type_display("Four-Seam Fastball").unwrap(), "FF");
        assert_eq!(outcome_display("Called Strike").unwrap(), "STRIKE");
        assert_eq!(outcome_display("In play, run(s)").unwrap(), "IN PLAY");
    }

    #[test]
    fn unknown_phrase_error_names_the_phrase() {
        assert_eq!(
            pitch_type_display("Screwball").unwrap_err(),
            ExtractError::UnknownPitchType("Screwball".to_string()),
        );
        assert_eq!(
            outcome_display("Balk").unwrap_err(),
            ExtractError::UnknownOutcome("Balk".to_string()),
        );
    }

    #[test]
    fn lookup_is_exact_match_only() {
        assert!(pitch_type_display("four-seam fastball").is_err());
        assert!(outcome_display("ball").is_err());
    }

    #[test]
    fn known_and_unknown_teams() {
        let dodgers = team_style(119).unwrap();
        assert_eq!(dodgers.name, "Dodgers");
        assert_eq!(dodgers.color, "#005A9C");
        assert!(team_style(999).is_none());
    }
}
