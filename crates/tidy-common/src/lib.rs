//! Shared utilities for Column Tidy crates.
//!
//! Cells arrive as Polars `AnyValue`s of whatever dtype the loader produced.
//! The cleaning rules work on text, so everything funnels through
//! [`any_to_cell`] (or [`any_to_text`] where blanks are data) before a rule
//! sees it.

mod cell;

pub use cell::{any_to_cell, any_to_text, is_blank};
