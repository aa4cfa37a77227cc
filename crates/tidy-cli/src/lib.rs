//! CLI library components for Column Tidy.

pub mod logging;
pub mod pipeline;
pub mod plan;
pub mod types;
