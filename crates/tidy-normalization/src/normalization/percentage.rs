//! Percentage cleaning.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::PercentageMode;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:\d+(?:\.\d*)?|\.\d+)$").expect("Invalid percentage number regex")
});

/// Convert a percentage string to a decimal fraction.
///
/// `"50%"` and `"50 %"` both give `0.5`. Without a `%` suffix the value is
/// missing in [`PercentageMode::Strict`] and taken as already-decimal in
/// [`PercentageMode::Lenient`].
pub fn normalize_percentage(value: &str, mode: PercentageMode) -> Option<f64> {
    let trimmed = value.trim();

    match trimmed.strip_suffix('%') {
        Some(number) => parse_number(number.trim()).map(|v| v / 100.0),
        None => match mode {
            PercentageMode::Strict => None,
            PercentageMode::Lenient => parse_number(trimmed),
        },
    }
}

fn parse_number(value: &str) -> Option<f64> {
    if !NUMBER.is_match(value) {
        return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
