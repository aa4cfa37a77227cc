//! Email address cleaning.
//!
//! Unlike URLs, emails are validated: a value that does not look like an
//! address is dropped rather than passed through, because cleaned emails are
//! typically used as join keys.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` with non-empty dot-separated domain labels.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").expect("Invalid email regex")
});

/// Trim and lowercase an email address, or `None` if it is not shaped like one.
pub fn normalize_email(value: &str) -> Option<String> {
    let cleaned = value.trim().to_lowercase();
    EMAIL_REGEX.is_match(&cleaned).then_some(cleaned)
}
