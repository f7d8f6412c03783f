//! Field normalization.
//!
//! Every function here is total: bad input maps to `None` or an empty list,
//! never to an error.
use std::sync::LazyLock;

use regex::Regex;

use crate::{
    PLANETS_PER_PAGE,
    models::{Pagination, PlanetDto, PlanetResponse, PlanetsPage, RotationPeriod, SwapiPlanet},
};

/// SWAPI reports gravity in standard units, 1 standard = 9.8 m/s².
pub const GRAVITY_CONSTANT: f64 = 9.8;

const UNKNOWN: &str = "unknown";
const HOURS_PER_DAY: f64 = 24.0;

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("valid float pattern")
});

pub fn to_number(value: &str) -> Option<f64> {
    if value == UNKNOWN {
        return None;
    }

    parse_float_prefix(value)
}

/// Splits an hour count into whole days plus the remaining hours.
pub fn to_period(value: &str) -> Option<RotationPeriod> {
    if value == UNKNOWN {
        return None;
    }

    let total_hours = parse_float_prefix(value).filter(|hours| hours.is_finite())?;

    Some(RotationPeriod {
        days: (total_hours / HOURS_PER_DAY).floor(),
        hours: total_hours % HOURS_PER_DAY,
    })
}

/// `"1 standard"` -> 9.8 m/s². Only the text before the first space counts.
pub fn to_gravity(value: &str) -> Option<f64> {
    if value == UNKNOWN {
        return None;
    }

    let number = value.split(' ').next().unwrap_or_default();

    parse_float_prefix(number).map(|standard| standard * GRAVITY_CONSTANT)
}

/// Items are kept verbatim, `"a, b"` yields `["a", " b"]`.
pub fn to_string_list(value: &str) -> Vec<String> {
    if value == UNKNOWN {
        return Vec::new();
    }

    value.split(',').map(str::to_string).collect()
}

pub fn normalize_planet(planet: &SwapiPlanet) -> PlanetDto {
    PlanetDto {
        name: planet.name.clone(),
        climate: to_string_list(&planet.climate),
        terrain: to_string_list(&planet.terrain),
        gravity: to_gravity(&planet.gravity),
        diameter: to_number(&planet.diameter),
        rotation_period: to_period(&planet.rotation_period),
        surface_water: to_number(&planet.surface_water),
        population: to_number(&planet.population),
        residents: planet.residents.len(),
        films: planet.films.len(),
    }
}

pub fn normalize_page(response: &PlanetResponse, page: u32) -> PlanetsPage {
    PlanetsPage {
        data: response.results.iter().map(normalize_planet).collect(),
        pagination: Pagination {
            total_items: response.count,
            per_page: PLANETS_PER_PAGE,
            page,
        },
    }
}

/// Parses the longest leading decimal float, ignoring whatever follows it.
///
/// `"1,000"` -> 1, `"12.5km"` -> 12.5, `"  7"` -> 7, `"abc"` -> None.
fn parse_float_prefix(value: &str) -> Option<f64> {
    let number = LEADING_FLOAT.find(value.trim_start())?;

    number.as_str().parse().ok()
}
