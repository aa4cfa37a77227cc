//! Scientific-notation cleaning.
//!
//! Parsing goes through `str::parse::<f64>`, which rounds to the nearest
//! double. Values beyond the double range would parse to a signed infinity;
//! those are reported as missing instead, since a stray infinity poisons any
//! later sum or mean. Underflow still rounds to zero as IEEE-754 specifies.

use std::sync::LazyLock;

use regex::Regex;

/// Mantissa with optional fraction, optional `e`/`E` exponent.
static SCIENTIFIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?$")
        .expect("Invalid scientific notation regex")
});

/// Parse `"1.23e-4"`-style values (and plain decimals) to a finite float.
///
/// ```
/// use tidy_normalization::normalization::normalize_scientific;
///
/// assert_eq!(normalize_scientific("1e3"), Some(1000.0));
/// assert_eq!(normalize_scientific("1e400"), None);
/// ```
pub fn normalize_scientific(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if !SCIENTIFIC_REGEX.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
