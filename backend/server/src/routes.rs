use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::IntoResponse,
};
use swapi::{PlanetsPage, fetch_planets, normalize_page};
use tracing::{debug, error};

use crate::{error::AppError, state::State, utils::parse_page};

const PAGE_PARAM: &str = "page";

pub async fn planets_handler(
    AxumState(state): AxumState<Arc<State>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<PlanetsPage>, AppError> {
    // First occurrence wins when `page` is repeated.
    let raw_page = params
        .iter()
        .find(|(key, _)| key == PAGE_PARAM)
        .map(|(_, value)| value.as_str());
    let page = parse_page(raw_page)?;

    let response = fetch_planets(&state.http_client, &state.config.swapi_url, page)
        .await
        .map_err(|e| {
            error!("Error fetching planets from SWAPI: {e}");
            AppError::from(e)
        })?;

    let planets = normalize_page(&response, page);
    debug!("Proxied page {page} with {} planets", planets.data.len());

    Ok(Json(planets))
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
