use std::{env, fmt::Display, str::FromStr, time::Duration};

use swapi::SWAPI_PLANETS_ENDPOINT;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
#[error("Invalid {key} value: {reason}")]
pub struct ConfigError {
    key: &'static str,
    reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub swapi_url: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("RUST_PORT", "1111")?,
            swapi_url: try_load("SWAPI_URL", SWAPI_PLANETS_ENDPOINT)?,
            upstream_timeout: Duration::from_millis(try_load("UPSTREAM_TIMEOUT_MS", "10000")?),
        })
    }

    pub fn new(port: u16, swapi_url: impl Into<String>) -> Self {
        Self {
            port,
            swapi_url: swapi_url.into(),
            upstream_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_upstream_timeout(mut self, upstream_timeout: Duration) -> Self {
        self.upstream_timeout = upstream_timeout;
        self
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .trim()
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError {
                key,
                reason: e.to_string(),
            }
        })
}
