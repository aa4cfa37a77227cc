//! Column cleaning engine.
//!
//! Normalizes messy text fields in a Polars `DataFrame`, one column at a
//! time: phone numbers, currency, percentages, emails, URLs, scientific
//! notation and roman numerals, plus a toy reversible cipher.
//!
//! # Overview
//!
//! This crate provides:
//! - **Per-cell rules** ([`normalization`]): pure `&str -> Option<T>` functions
//! - **Column operations**: `clean_phone_numbers`, `clean_monetary_values`, ...
//!   applying a rule to every row of the named columns
//! - **Plans**: an ordered list of rules, deserializable from TOML or JSON,
//!   executed with a per-column [`CleaningReport`]
//!
//! # Example
//!
//! ```ignore
//! use tidy_normalization::{CleaningPlan, CleaningRule, CleaningType, execute_plan};
//!
//! let plan = CleaningPlan::new()
//!     .with_rule(CleaningRule::new(CleaningType::Phone { min_digits: 9 }, ["phone"]))
//!     .with_rule(CleaningRule::new(CleaningType::Monetary, ["price"]));
//!
//! let (clean_df, report) = execute_plan(&df, &plan)?;
//! println!("{} cells could not be parsed", report.total_newly_missing());
//! ```
//!
//! # Failure model
//!
//! - **Structural errors** (unknown column, empty selection, name clash,
//!   empty passphrase) abort the call with a [`NormalizationError`].
//! - **Cell failures** never raise. The cell becomes null and the rest of
//!   the column is still processed.
//!
//! Inputs are never mutated; every operation returns a new `DataFrame`.

mod error;
mod executor;
mod report;
mod types;

pub mod normalization;

// Core types
pub use types::{
    CleaningPlan, CleaningRule, CleaningType, DEFAULT_MIN_PHONE_DIGITS, ENCRYPTED_SUFFIX,
    Passphrase, PercentageMode,
};

// Error type
pub use error::{NormalizationError, Result};

// Reporting
pub use report::{CleaningReport, ColumnReport};

// Execution
pub use executor::{
    apply_rule, apply_transform, clean_emails, clean_monetary_values, clean_percentages,
    clean_phone_numbers, clean_roman_numerals, clean_scientific_notation, clean_urls,
    decrypt_columns, encrypt_columns, execute_plan, execute_plan_with,
};
