use serde::{Deserialize, Serialize, Serializer};

/// Largest integer a JavaScript number holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Deserialize, Debug, Clone)]
pub struct SwapiPlanet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub gravity: String,
    pub diameter: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub surface_water: String,
    pub population: String,
    pub residents: Vec<String>,
    pub films: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlanetResponse {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<SwapiPlanet>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RotationPeriod {
    #[serde(serialize_with = "serialize_number")]
    pub days: f64,
    #[serde(serialize_with = "serialize_number")]
    pub hours: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanetDto {
    pub name: String,
    pub climate: Vec<String>,
    pub terrain: Vec<String>,
    #[serde(serialize_with = "serialize_optional_number")]
    pub gravity: Option<f64>,
    #[serde(serialize_with = "serialize_optional_number")]
    pub diameter: Option<f64>,
    pub rotation_period: Option<RotationPeriod>,
    #[serde(serialize_with = "serialize_optional_number")]
    pub surface_water: Option<f64>,
    #[serde(serialize_with = "serialize_optional_number")]
    pub population: Option<f64>,
    pub residents: usize,
    pub films: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_items: u64,
    pub per_page: u32,
    pub page: u32,
}

/// Envelope served by `/api/planets`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlanetsPage {
    pub data: Vec<PlanetDto>,
    pub pagination: Pagination,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

// Integral values go out as JSON integers so `10465` never turns into `10465.0`.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return serializer.serialize_none();
    }

    if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        return serializer.serialize_i64(*value as i64);
    }

    serializer.serialize_f64(*value)
}

fn serialize_optional_number<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(number) => serialize_number(number, serializer),
        None => serializer.serialize_none(),
    }
}
