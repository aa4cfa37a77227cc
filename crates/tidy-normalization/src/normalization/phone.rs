//! Phone number cleaning.

/// Strip everything but ASCII digits.
///
/// Other Unicode digits (fullwidth `５`, Arabic-Indic `٥`) are dropped like
/// any separator; the output is always a plain `0-9` string.
///
/// Returns `None` when fewer than `min_digits` digits remain, so a
/// truncated number never masquerades as a real one.
///
/// ```
/// use tidy_normalization::normalization::normalize_phone;
///
/// assert_eq!(normalize_phone("+1 (234) 567-8901", 7), Some("12345678901".to_string()));
/// assert_eq!(normalize_phone("123-456", 7), None);
/// ```
pub fn normalize_phone(value: &str, min_digits: usize) -> Option<String> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() || digits.len() < min_digits {
        return None;
    }
    Some(digits)
}
