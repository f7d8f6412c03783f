use reqwest::Client;
use serde_json::Value;
use swapi::PlanetsPage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error {0}")]
    Status(u16),

    #[error("{0}")]
    Server(String),

    #[error("Unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub async fn fetch_page(
    client: &Client,
    base_url: &str,
    page: u32,
) -> Result<PlanetsPage, ClientError> {
    let url = format!("{}/api/planets", base_url.trim_end_matches('/'));
    let response = client.get(url).query(&[("page", page)]).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status.as_u16()));
    }

    let body: Value = serde_json::from_slice(&response.bytes().await?)?;

    if let Some(error) = body.get("error") {
        let message = error.as_str().unwrap_or("Unknown error").to_string();
        return Err(ClientError::Server(message));
    }

    Ok(serde_json::from_value(body)?)
}
