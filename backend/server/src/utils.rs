use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;

pub const DEFAULT_PAGE: u32 = 1;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("valid page pattern"));

/// Reads the `page` query value the way a lenient integer parser would:
/// optional sign, then digits, anything after the digits is ignored.
pub fn parse_page(raw: Option<&str>) -> Result<u32, AppError> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value.trim_start(),
        _ => return Ok(DEFAULT_PAGE),
    };

    let digits = LEADING_INTEGER
        .find(raw)
        .ok_or(AppError::InvalidPage)?
        .as_str();

    match digits.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(AppError::InvalidPage),
    }
}
