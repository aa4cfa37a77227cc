//! Error types for the column cleaning engine.
//!
//! Only request-level problems are errors. A cell that fails its rule becomes
//! null and is counted in the report instead.

use thiserror::Error;

/// Errors that abort a whole cleaning call.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NormalizationError {
    /// Column not found in source DataFrame.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// A rule was given no columns to work on.
    #[error("Column selection cannot be empty")]
    EmptyColumnSelection,

    /// A derived column name collides with an existing column.
    #[error("Column already exists: {0}")]
    ColumnExists(String),

    /// Cipher rules need a passphrase with at least one byte.
    #[error("Passphrase cannot be empty")]
    EmptyPassphrase,

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    PolarsError(#[from] polars::error::PolarsError),
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizationError>;
