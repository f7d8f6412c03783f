//! # SWAPI
//!
//! Wire models for the public planet catalogue and the normalization pass that
//! turns its string-encoded fields into typed values.
//!
//! ## Upstream
//! - `GET https://swapi.py4e.com/api/planets/?page=N`
//! - 10 planets per page, `count` holds the catalogue size
//! - Every measurement is a string, `"unknown"` marks missing data
//!
//! ## Normalized
//! - Numbers become `f64`, missing or unparsable values become `null`
//! - Rotation period (hours) becomes `{ days, hours }`
//! - Gravity (`"1 standard"`) becomes m/s²
//! - Comma joined lists become arrays, residents/films become counts
pub mod models;
pub mod remote;
pub mod transform;

pub use models::{
    ErrorBody, Pagination, PlanetDto, PlanetResponse, PlanetsPage, RotationPeriod, SwapiPlanet,
};
pub use remote::{RemoteError, fetch_planets};
pub use transform::{normalize_page, normalize_planet};

pub const SWAPI_PLANETS_ENDPOINT: &str = "https://swapi.py4e.com/api/planets/";
pub const PLANETS_PER_PAGE: u32 = 10;
