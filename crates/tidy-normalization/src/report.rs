//! Data-quality counts for a cleaning run.
//!
//! Per-cell failures never raise; they become nulls. These counts are how a
//! caller finds out how many cells were lost.

use serde::Serialize;

/// Outcome of cleaning one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReport {
    /// Source column name.
    pub column: String,

    /// Column the cleaned values were written to.
    pub output_column: String,

    /// Transform identifier (see [`crate::CleaningType::name`]).
    pub transform: String,

    /// Number of rows processed.
    pub rows: usize,

    /// Null or blank cells before cleaning.
    pub missing_before: usize,

    /// Null cells after cleaning.
    pub missing_after: usize,
}

impl ColumnReport {
    /// Cells that had a value but failed the transform's rule.
    pub fn newly_missing(&self) -> usize {
        self.missing_after.saturating_sub(self.missing_before)
    }
}

/// Column reports for a whole plan, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub columns: Vec<ColumnReport>,
}

impl CleaningReport {
    /// Sum of [`ColumnReport::newly_missing`] over all columns.
    pub fn total_newly_missing(&self) -> usize {
        self.columns.iter().map(ColumnReport::newly_missing).sum()
    }

    /// True when no cell was lost to a failed parse.
    pub fn is_lossless(&self) -> bool {
        self.total_newly_missing() == 0
    }
}

impl Extend<ColumnReport> for CleaningReport {
    fn extend<T: IntoIterator<Item = ColumnReport>>(&mut self, iter: T) {
        self.columns.extend(iter);
    }
}
