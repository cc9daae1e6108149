use anyhow::{Context, Result};
use glob::glob;
use indicatif::{ProgressIterator, ProgressStyle};
use serde_json::json;
use tracing::warn;

mod batter;
mod error;
mod feed;
mod fetch;
mod grid;
mod snapshot;
mod vocab;

use error::ExtractError;

fn no_snapshot_body(err: &ExtractError) -> serde_json::Value {
    json!({ "error": err.to_string(), "reason": err.reason() })
}

/// Parse one feed document and print the snapshot (or the documented
/// "no snapshot" body). When a client is given, the current batter's season
/// average is fetched first; offline callers get "N/A".
async fn print_snapshot(document: &serde_json::Value, client: Option<&reqwest::Client>) -> Result<()> {
    let feed = match feed::LiveFeed::from_value(document) {
        Ok(feed) => feed,
        Err(err) => {
            println!("{}", no_snapshot_body(&err));
            return Ok(());
        }
    };

    let mut batting_avg = None;
    if let (Some(client), Some((play, _))) = (client, snapshot::current_pitch(&feed.plays)) {
        batting_avg = fetch::batting_average(client, play.batter_id)
            .await
            .unwrap_or_else(|err| {
                warn!("season stats lookup failed: {err:#}");
                None
            });
    }

    match snapshot::assemble(&feed, batting_avg.as_deref()) {
        Ok(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        Err(err) => println!("{}", no_snapshot_body(&err)),
    }

    Ok(())
}

/// Fetch the live game for a team and extract its snapshot.
async fn live(team_name: &str) -> Result<()> {
    let client = reqwest::Client::new();

    let team_id = match fetch::team_id_by_name(&client, team_name).await? {
        Some(id) => id,
        None => {
            println!("{}", json!({ "error": "Team not found" }));
            return Ok(());
        }
    };

    let game_pk = match fetch::live_game_pk(&client, team_id).await? {
        Some(pk) => pk,
        None => {
            println!("{}", no_snapshot_body(&ExtractError::NoLiveGame));
            return Ok(());
        }
    };

    let document = fetch::live_feed(&client, game_pk).await?;
    print_snapshot(&document, Some(&client)).await
}

/// Extract a snapshot from a feed document saved on disk.
async fn extract(path: &str) -> Result<()> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let document = serde_json::from_str::<serde_json::Value>(&raw)
        .with_context(|| format!("parsing {path}"))?;
    print_snapshot(&document, None).await
}

/// Run the pipeline over every saved feed document under data/, writing each
/// snapshot next to its source under snapshots/.
fn batch() -> Result<()> {
    let paths = glob("data/**/*.json")?
        .filter_map(|entry| entry.ok())
        .collect::<Vec<_>>();

    let progress_style = ProgressStyle::default_bar()
        .template("{wide_bar} {pos}/{len} | elapsed: {elapsed_precise}, eta: {eta_precise}")?;
    for path in paths.iter().progress_with_style(progress_style) {
        let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let document = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(document) => document,
            Err(err) => {
                warn!("{}: not a JSON document, skipping ({err})", path.display());
                continue;
            }
        };

        let result = feed::LiveFeed::from_value(&document)
            .and_then(|feed| snapshot::assemble(&feed, None));
        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("{}: {err}, skipping", path.display());
                continue;
            }
        };

        let out_path = std::path::PathBuf::from(
            path.to_string_lossy().replacen("data", "snapshots", 1),
        );
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&out_path, serde_json::to_string_pretty(&snapshot)?)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    match std::env::args().nth(1) {
        Some(command) => match command.as_str() {
            "live" => {
                let team_name = std::env::args().skip(2).collect::<Vec<_>>().join(" ");
                if team_name.is_empty() {
                    eprintln!("Usage: gameday-snapshot live <team name>");
                    return Ok(());
                }
                live(&team_name).await?;
            }
            "extract" => match std::env::args().nth(2) {
                Some(path) => extract(&path).await?,
                None => eprintln!("Usage: gameday-snapshot extract <feed.json>"),
            },
            "batch" => batch()?,
            _ => eprintln!("Unknown command."),
        },
        None => eprintln!("Please provide a command."),
    }

    Ok(())
}
