use std::path::PathBuf;

use tidy_normalization::CleaningReport;

/// Result of cleaning one input file.
#[derive(Debug)]
pub struct CleaningOutcome {
    pub input: PathBuf,
    /// None on a dry run.
    pub output: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
    pub rows: usize,
    pub report: CleaningReport,
}
