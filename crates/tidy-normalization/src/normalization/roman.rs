//! Roman numeral conversion.
//!
//! Only the strict canonical form is accepted: at most three repeats of
//! I/X/C/M, no repeats of V/L/D, and only the six subtractive pairs IV, IX,
//! XL, XC, CD, CM. Forms that lenient parsers take, like `IIII` or `IIX`,
//! are missing here. Range is 1..=3999; an empty cell is missing, not 0.

const NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value with a canonical numeral.
pub const MAX_ROMAN: i64 = 3999;

fn numeral_value(c: char) -> Option<i64> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Convert a roman numeral to an integer.
///
/// Case-insensitive, surrounding whitespace ignored.
///
/// ```
/// use tidy_normalization::normalization::roman_to_int;
///
/// assert_eq!(roman_to_int("XIV"), Some(14));
/// assert_eq!(roman_to_int("cm"), Some(900));
/// assert_eq!(roman_to_int("VX"), None);
/// ```
pub fn roman_to_int(value: &str) -> Option<i64> {
    let numeral = value.trim().to_ascii_uppercase();
    let values = numeral
        .chars()
        .map(numeral_value)
        .collect::<Option<Vec<i64>>>()?;
    if values.is_empty() {
        return None;
    }

    let mut total = 0;
    for (idx, &current) in values.iter().enumerate() {
        match values.get(idx + 1) {
            Some(&next) if current < next => total -= current,
            _ => total += current,
        }
    }

    // Additive parsing accepts junk like "VX" (=5); only keep values whose
    // canonical spelling is exactly what we were given.
    match int_to_roman(total) {
        Some(canonical) if canonical == numeral => Some(total),
        _ => None,
    }
}

/// Canonical roman numeral for `1..=3999`, `None` outside that range.
pub fn int_to_roman(value: i64) -> Option<String> {
    if !(1..=MAX_ROMAN).contains(&value) {
        return None;
    }

    let mut remaining = value;
    let mut out = String::new();
    for &(amount, symbol) in &NUMERALS {
        while remaining >= amount {
            out.push_str(symbol);
            remaining -= amount;
        }
    }
    Some(out)
}
