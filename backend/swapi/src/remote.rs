use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::PlanetResponse;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("SWAPI request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("SWAPI request failed with status {0}")]
    Status(u16),

    #[error("SWAPI returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches a single page of planets, no caching and no retries.
pub async fn fetch_planets(
    client: &Client,
    base_url: &str,
    page: u32,
) -> Result<PlanetResponse, RemoteError> {
    let response = client.get(base_url).query(&[("page", page)]).send().await?;

    let status = response.status();
    debug!("SWAPI page {page} answered {status}");

    if !status.is_success() {
        return Err(RemoteError::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;

    Ok(serde_json::from_slice(&bytes)?)
}
