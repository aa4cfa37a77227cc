//! Core types for the cleaning system.
//!
//! A [`CleaningPlan`] is an ordered list of [`CleaningRule`]s, each pairing a
//! [`CleaningType`] with the columns it applies to. Plans deserialize from
//! TOML or JSON:
//!
//! ```toml
//! [[rules]]
//! columns = ["phone", "fax"]
//! transform = { kind = "phone", min_digits = 9 }
//!
//! [[rules]]
//! columns = ["discount"]
//! transform = { kind = "percentage", mode = "lenient" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{NormalizationError, Result};

/// Default minimum digit count for a phone number to be kept.
pub const DEFAULT_MIN_PHONE_DIGITS: usize = 7;

/// Suffix appended to a column name when it is encrypted.
pub const ENCRYPTED_SUFFIX: &str = "_encrypted";

/// How percentage cells without a `%` suffix are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentageMode {
    /// Require the `%` suffix; anything else is missing.
    #[default]
    Strict,
    /// Accept bare numbers as already-decimal fractions.
    Lenient,
}

/// Passphrase for the toy column cipher.
///
/// Guaranteed non-empty. The bytes are used verbatim as the keystream, so
/// this offers no real secrecy.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Passphrase(String);

impl Passphrase {
    /// Create a passphrase, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(NormalizationError::EmptyPassphrase);
        }
        Ok(Self(value))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Passphrase(***)")
    }
}

impl TryFrom<String> for Passphrase {
    type Error = NormalizationError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Passphrase> for String {
    fn from(value: Passphrase) -> Self {
        value.0
    }
}

/// Cleaning transform applied to every cell of a column.
///
/// Each variant maps one cell to one output type:
/// text for phone/email/url/cipher, `Float64` for monetary/percentage/
/// scientific, `Int64` for roman numerals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum CleaningType {
    /// Digits only; fewer than `min_digits` digits is missing.
    Phone {
        #[serde(default = "default_min_digits")]
        min_digits: usize,
    },

    /// Currency text to a signed float.
    Monetary,

    /// `"50%"` to `0.5`.
    Percentage {
        #[serde(default)]
        mode: PercentageMode,
    },

    /// Lowercased, shape-checked email address.
    Email,

    /// Scheme, `www.` and one trailing slash stripped.
    Url,

    /// Scientific notation or plain decimal to a finite float.
    Scientific,

    /// Strict roman numeral to integer.
    Roman,

    /// Toy cipher; the column is renamed with [`ENCRYPTED_SUFFIX`].
    Encrypt { passphrase: Passphrase },

    /// Inverse of [`CleaningType::Encrypt`]; strips [`ENCRYPTED_SUFFIX`].
    Decrypt { passphrase: Passphrase },
}

fn default_min_digits() -> usize {
    DEFAULT_MIN_PHONE_DIGITS
}

impl CleaningType {
    /// Short identifier used in plans, logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Phone { .. } => "phone",
            Self::Monetary => "monetary",
            Self::Percentage { .. } => "percentage",
            Self::Email => "email",
            Self::Url => "url",
            Self::Scientific => "scientific",
            Self::Roman => "roman",
            Self::Encrypt { .. } => "encrypt",
            Self::Decrypt { .. } => "decrypt",
        }
    }

    /// Returns true if the output lands in a renamed column.
    pub fn renames_column(&self) -> bool {
        matches!(self, Self::Encrypt { .. } | Self::Decrypt { .. })
    }

    /// Name of the column the output is written to.
    pub fn output_column(&self, source: &str) -> String {
        match self {
            Self::Encrypt { .. } => format!("{source}{ENCRYPTED_SUFFIX}"),
            Self::Decrypt { .. } => source
                .strip_suffix(ENCRYPTED_SUFFIX)
                .filter(|base| !base.is_empty())
                .unwrap_or(source)
                .to_string(),
            _ => source.to_string(),
        }
    }
}

/// A transform bound to the columns it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningRule {
    /// Source column names, processed in order.
    pub columns: Vec<String>,

    /// Transform applied to each column.
    pub transform: CleaningType,
}

impl CleaningRule {
    /// Create a rule for the given columns.
    pub fn new<I, S>(transform: CleaningType, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            transform,
        }
    }
}

/// Ordered list of cleaning rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningPlan {
    /// Rules applied in order; later rules see earlier rules' output.
    pub rules: Vec<CleaningRule>,
}

impl CleaningPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule to the plan.
    pub fn add_rule(&mut self, rule: CleaningRule) {
        self.rules.push(rule);
    }

    /// Builder-style variant of [`CleaningPlan::add_rule`].
    #[must_use]
    pub fn with_rule(mut self, rule: CleaningRule) -> Self {
        self.add_rule(rule);
        self
    }
}
