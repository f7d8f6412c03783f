//! Proxy server in front of the public SWAPI planet catalogue.
//!
//!
//!
//! # Flow
//! - Client asks `GET /api/planets?page=N`, page defaults to 1
//! - Page is validated before anything leaves the box, bad pages get a 400
//! - One upstream call per request, no cache and no retry
//! - Upstream strings are normalized into typed values (see the `swapi` crate)
//! - Any upstream failure is logged and surfaced as a 502
//!
//!
//!
//! # Envelope
//! ```json
//! {
//!   "data": [{ "name": "Tatooine", "gravity": 9.8, "rotationPeriod": { "days": 0, "hours": 23 }, ... }],
//!   "pagination": { "totalItems": 60, "perPage": 10, "page": 1 }
//! }
//! ```
//!
//! Errors come back as `{ "error": "..." }`.
//!
//!
//!
//! # Environment
//! - `RUST_PORT`: listening port, default `1111`
//! - `SWAPI_URL`: upstream planets endpoint
//! - `UPSTREAM_TIMEOUT_MS`: upstream timeout, default `10000`
//! - `RUST_LOG`: tracing filter, e.g. `RUST_LOG=server=debug`
use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use routes::{health_handler, planets_handler};
use state::State;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let config = Config::load()?;
    let state = State::new(config).context("Failed to build SWAPI client")?;

    info!("Starting server...");
    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/planets", get(planets_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
