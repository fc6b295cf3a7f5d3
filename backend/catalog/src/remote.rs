use reqwest::{Client, Response, get};
use tracing::info;

use crate::{error::LoadError, models::GameRecord, parse::parse_catalog};

/// Fetches and parses the catalog with a one-off client.
pub async fn load(url: &str) -> Result<Vec<GameRecord>, LoadError> {
    let response = get(url).await?;

    read_catalog(url, response).await
}

pub async fn load_with(client: &Client, url: &str) -> Result<Vec<GameRecord>, LoadError> {
    let response = client.get(url).send().await?;

    read_catalog(url, response).await
}

async fn read_catalog(url: &str, response: Response) -> Result<Vec<GameRecord>, LoadError> {
    let response = response.error_for_status()?;
    let bytes = response.bytes().await?;

    let text = std::str::from_utf8(&bytes).map_err(|_| LoadError::NonText)?;
    let records = parse_catalog(text);

    info!("Loaded {} games from {url}", records.len());

    Ok(records)
}
