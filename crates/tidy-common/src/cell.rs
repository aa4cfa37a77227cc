//! Polars `AnyValue` to cell-text conversion.
//!
//! Cleaning rules only ever see text. Typed cells (integers, floats, booleans)
//! are rendered the way a CSV would show them, so `5551234567` stored as
//! `Int64` cleans exactly like the string `"5551234567"`.

use polars::prelude::AnyValue;

/// Renders a cell as text, `None` only for a real null.
///
/// Empty and whitespace-only strings come back verbatim. Use this where
/// blanks are data, as in the column cipher.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use tidy_common::any_to_text;
///
/// assert_eq!(any_to_text(AnyValue::Null), None);
/// assert_eq!(any_to_text(AnyValue::String(" ")), Some(" ".to_string()));
/// assert_eq!(any_to_text(AnyValue::Float64(40.0)), Some("40".to_string()));
/// ```
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    let text = match value {
        AnyValue::Null => return None,
        AnyValue::String(s) => s.to_owned(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Boolean(v) => v.to_string(),
        AnyValue::Float32(v) => render_float(v),
        AnyValue::Float64(v) => render_float(v),
        // Display quotes some other dtypes
        other => other.to_string().trim_matches('"').to_owned(),
    };
    Some(text)
}

/// Renders a cell as text, `None` for nulls and blank strings.
///
/// Every value-cleaning rule reads cells through this, so a blank cell stays
/// missing whichever rule is applied.
pub fn any_to_cell(value: AnyValue<'_>) -> Option<String> {
    any_to_text(value).filter(|text| !is_blank(text))
}

/// True for the empty string and whitespace-only strings.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Shortest decimal form, `40.0` as `"40"`, and no `"-0"`.
fn render_float<F>(value: F) -> String
where
    F: std::fmt::Display + Into<f64> + Copy,
{
    if value.into() == 0.0 {
        "0".to_owned()
    } else {
        value.to_string()
    }
}
