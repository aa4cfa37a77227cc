//! Monetary value cleaning.
//!
//! A period is always the decimal point and a comma is always a thousands
//! separator, so `"1.234,56"` reads as `1.23456`. Locale-aware parsing is
//! out of scope.

use std::sync::LazyLock;

use regex::Regex;

/// Currency symbols, whitespace and thousands separators.
static DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Sc}\s,]").expect("Invalid currency decoration regex"));

/// Optional sign, optional three-letter currency code on either side.
static AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<lead>[-+])?(?:[A-Za-z]{3})?(?P<sign>[-+])?(?P<number>\d+(?:\.\d*)?|\.\d+)(?:[A-Za-z]{3})?$",
    )
    .expect("Invalid monetary amount regex")
});

/// Parse a currency string to a float.
///
/// Handles:
/// - Currency symbols anywhere: "$1,234.50", "12 €"
/// - ISO codes before or after: "USD 12", "12EUR"
/// - Negatives: "-$5", "$-5", "(50)"
///
/// Returns `None` for anything that does not reduce to a single number.
pub fn normalize_monetary(value: &str) -> Option<f64> {
    let cleaned = DECORATION.replace_all(value.trim(), "");

    let (parenthesized, body) = match cleaned
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
    {
        Some(inner) => (true, inner),
        None => (false, &cleaned[..]),
    };

    let caps = AMOUNT.captures(body)?;
    let sign = match (caps.name("lead"), caps.name("sign")) {
        (Some(_), Some(_)) => return None,
        (Some(m), None) | (None, Some(m)) => Some(m.as_str()),
        (None, None) => None,
    };

    // "(-50)" has two competing negations
    if parenthesized && sign.is_some() {
        return None;
    }

    let amount = caps["number"]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())?;
    if parenthesized || sign == Some("-") {
        Some(-amount)
    } else {
        Some(amount)
    }
}
