//! URL cleaning.
//!
//! Deliberately permissive: the prefix/suffix stripping runs on any text,
//! URL-looking or not, and nothing is validated. Compare [`super::email`],
//! which drops malformed values.

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Trim, lowercase, strip the scheme, a leading `www.` and one trailing `/`.
///
/// Returns `None` only when nothing is left. Already-clean values pass
/// through unchanged.
///
/// ```
/// use tidy_normalization::normalization::normalize_url;
///
/// assert_eq!(normalize_url("https://www.example.com/"), Some("example.com".to_string()));
/// assert_eq!(normalize_url("example.com"), Some("example.com".to_string()));
/// ```
pub fn normalize_url(value: &str) -> Option<String> {
    let lowered = value.trim().to_lowercase();
    let mut rest = lowered.as_str();

    if let Some(stripped) = SCHEMES.iter().find_map(|scheme| rest.strip_prefix(*scheme)) {
        rest = stripped;
    }
    rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest = rest.strip_suffix('/').unwrap_or(rest);

    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}
