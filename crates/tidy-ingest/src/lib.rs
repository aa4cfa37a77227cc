//! Tabular data ingestion and export.
//!
//! Loads CSV files into Polars DataFrames for cleaning and writes the
//! cleaned frames back out.
//!
//! Every column is read as text. Schema inference would turn
//! `"0044 20 7946 0000"` into a number or drop the leading `+` of a phone
//! number before any cleaning rule could see it.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tidy_ingest::{read_csv_table, write_csv_table};
//!
//! let mut df = read_csv_table(Path::new("contacts.csv"))?;
//! write_csv_table(&mut df, Path::new("contacts_clean.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use csv::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_table,
    validate_dataframe_shape, validate_encoding, write_csv_table,
};
