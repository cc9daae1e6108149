use anyhow::{Context, Result};
use tracing::debug;

/// statsapi base. Overridable so tests and mirrors can point elsewhere.
fn base_url() -> String {
    std::env::var("STATSAPI_BASE")
        .unwrap_or_else(|_| "https://statsapi.mlb.com/api/v1".to_string())
}

/// Resolve a team id from a human-entered name, matching either the full
/// franchise name or the short club name, case-insensitively.
pub async fn team_id_by_name(client: &reqwest::Client, name: &str) -> Result<Option<u64>> {
    let url = format!("{}/teams?sportId=1", base_url());
    let body = client
        .get(&url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .context("fetching team directory")?
        .json::<serde_json::Value>()
        .await
        .context("decoding team directory")?;

    Ok(match_team_id(&body, name))
}

fn match_team_id(body: &serde_json::Value, name: &str) -> Option<u64> {
    let wanted = name.to_lowercase();
    for team in body["teams"].as_array()? {
        let full = team["name"].as_str().unwrap_or("").to_lowercase();
        let short = team["teamName"].as_str().unwrap_or("").to_lowercase();
        if wanted == full || wanted == short {
            return team["id"].as_u64();
        }
    }
    None
}

/// Today's schedule for one team; `Some(gamePk)` only while a game is live.
pub async fn live_game_pk(client: &reqwest::Client, team_id: u64) -> Result<Option<u64>> {
    let url = format!("{}/schedule?sportId=1&teamId={team_id}", base_url());
    let body = client
        .get(&url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .context("fetching schedule")?
        .json::<serde_json::Value>()
        .await
        .context("decoding schedule")?;

    Ok(live_pk_from_schedule(&body))
}

fn live_pk_from_schedule(body: &serde_json::Value) -> Option<u64> {
    for date in body["dates"].as_array()? {
        for game in date["games"].as_array()? {
            if game["status"]["abstractGameState"].as_str() == Some("Live") {
                return game["gamePk"].as_u64();
            }
        }
    }
    None
}

/// Full live feed document for one game. The live feed lives on the v1.1
/// surface; everything else this module touches is v1.
pub async fn live_feed(client: &reqwest::Client, game_pk: u64) -> Result<serde_json::Value> {
    let url = format!("{}.1/game/{game_pk}/feed/live", base_url());
    debug!("fetching live feed: {url}");
    client
        .get(&url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .context("fetching live feed")?
        .json::<serde_json::Value>()
        .await
        .context("decoding live feed")
}

/// Season batting average for a player, `None` when the stats document does
/// not carry one (early season, pitchers, September call-ups).
pub async fn batting_average(client: &reqwest::Client, player_id: u64) -> Result<Option<String>> {
    let url = format!(
        "{}/people/{player_id}/stats?stats=season&group=hitting",
        base_url()
    );
    let body = client
        .get(&url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .context("fetching season stats")?
        .json::<serde_json::Value>()
        .await
        .context("decoding season stats")?;

    Ok(avg_from_stats(&body))
}

fn avg_from_stats(body: &serde_json::Value) -> Option<String> {
    body["stats"][0]["splits"][0]["stat"]["avg"]
        .as_str()
        .map(|avg| avg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_full_or_club_name_case_insensitively() {
        let body = json!({
            "teams": [
                { "id": 119, "name": "Los Angeles Dodgers", "teamName": "Dodgers" },
                { "id": 137, "name": "San Francisco Giants", "teamName": "Giants" },
            ]
        });
        assert_eq!(match_team_id(&body, "dodgers"), Some(119));
        assert_eq!(match_team_id(&body, "SAN FRANCISCO GIANTS"), Some(137));
        assert_eq!(match_team_id(&body, "Gotham Knights"), None);
    }

    #[test]
    fn picks_only_live_games_from_schedule() {
        let body = json!({
            "dates": [
                {
                    "games": [
                        { "gamePk": 1, "status": { "abstractGameState": "Final" } },
                        { "gamePk": 2, "status": { "abstractGameState": "Live" } },
                    ]
                }
            ]
        });
        assert_eq!(live_pk_from_schedule(&body), Some(2));

        let idle = json!({ "dates": [] });
        assert_eq!(live_pk_from_schedule(&idle), None);
    }

    #[test]
    fn avg_is_none_when_structurally_absent() {
        let body = json!({
            "stats": [
                { "splits": [ { "stat": { "avg": ".287" } } ] }
            ]
        });
        assert_eq!(avg_from_stats(&body), Some(".287".to_string()));

        assert_eq!(avg_from_stats(&json!({ "stats": [] })), None);
        assert_eq!(avg_from_stats(&json!({})), None);
    }
}
