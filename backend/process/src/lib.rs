//! # Catalog Fetch
//!
//! One load cycle against the published spreadsheet, printed to stdout.
//!
//! 1. Fetch the CSV once, no retries.
//! 2. Parse every non-blank row after the header.
//! 3. Optionally narrow to the featured slice, then apply the search query.
//! 4. Print JSON or one line per game.
use anyhow::{Context, Result};
use catalog::{GameRecord, featured, filter, load};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

pub mod utils;

use utils::format_line;

pub async fn fetch_games(url: &str, query: &str, only_featured: bool, json: bool) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.set_message(format!("Fetching {url}"));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    info!("Fetching games from {url}");

    let loaded = load(url).await;
    pb.finish_and_clear();

    let records = loaded.with_context(|| format!("Failed to load games from {url}"))?;

    info!("Loaded {} games", records.len());

    let games = select_games(&records, query, only_featured);

    if json {
        println!("{}", serde_json::to_string_pretty(&games)?);
        return Ok(());
    }

    print_games(&games, records.len());

    Ok(())
}

/// Narrows to the featured slice first, then applies the query.
pub fn select_games<'a>(
    records: &'a [GameRecord],
    query: &str,
    only_featured: bool,
) -> Vec<&'a GameRecord> {
    let pool = if only_featured {
        featured(records)
    } else {
        records
    };

    filter(pool, query)
}

fn print_games(games: &[&GameRecord], total: usize) {
    for game in games {
        println!("{}", format_line(game));
    }

    println!("\n{}", summary_line(games.len(), total));
}

pub fn summary_line(shown: usize, total: usize) -> String {
    format!("Shown: {shown} of {total}")
}
