//! Text for each table cell.
use swapi::RotationPeriod;

pub const UNKNOWN_CELL: &str = "Unknown";

/// Groups thousands with commas and keeps at most three fraction digits,
/// `1234567.5` -> `1,234,567.5`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value.is_infinite() {
        let infinity = if value > 0.0 { "∞" } else { "-∞" };
        return infinity.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    if value.is_sign_negative() && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.insert(0, '-');
    }

    grouped
}

/// Uppercases the first letter of every word.
pub fn capitalize(value: &str) -> String {
    let mut capitalized = String::with_capacity(value.len());
    let mut word_start = true;

    for c in value.chars() {
        if word_start {
            capitalized.extend(c.to_uppercase());
        } else {
            capitalized.push(c);
        }
        word_start = c.is_whitespace();
    }

    capitalized
}

pub fn name_cell(value: &str) -> String {
    capitalize(value)
}

// Only the first item fits in a cell.
pub fn list_cell(values: &[String]) -> String {
    values
        .first()
        .map(|first| capitalize(first.trim()))
        .unwrap_or_default()
}

pub fn gravity_cell(value: Option<f64>) -> String {
    value.map_or_else(unknown, |gravity| {
        format!("{} m/s²", format_number(gravity))
    })
}

pub fn diameter_cell(value: Option<f64>) -> String {
    value.map_or_else(unknown, |diameter| format!("{} km", format_number(diameter)))
}

pub fn rotation_period_cell(value: Option<RotationPeriod>) -> String {
    let Some(RotationPeriod { days, hours }) = value else {
        return unknown();
    };

    let mut parts = Vec::with_capacity(2);
    if days > 0.0 {
        parts.push(format!("{days} d"));
    }
    if hours > 0.0 {
        parts.push(format!("{hours} hs"));
    }

    parts.join(" ")
}

pub fn surface_water_cell(value: Option<f64>) -> String {
    match value {
        Some(water) if water > 0.0 => "Yes".to_string(),
        Some(_) => "No".to_string(),
        None => unknown(),
    }
}

pub fn population_cell(value: Option<f64>) -> String {
    value.map_or_else(unknown, format_number)
}

pub fn count_cell(value: usize) -> String {
    format_number(value as f64)
}

fn unknown() -> String {
    UNKNOWN_CELL.to_string()
}
