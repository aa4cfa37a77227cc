//! File-level cleaning: read a CSV, apply a plan, write the results.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, trace};

use tidy_common::any_to_cell;
use tidy_ingest::{read_csv_table, write_csv_table};
use tidy_normalization::{CleaningPlan, CleaningReport, ColumnReport, execute_plan_with};

use crate::logging::redact_value;
use crate::types::CleaningOutcome;

/// Most failed cells logged per column at trace level.
const FAILED_CELL_SAMPLES: usize = 5;

/// Where and whether to write results.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Output CSV; defaults to [`default_output_path`].
    pub output: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
    /// Skip writing the output CSV. The JSON report is still written.
    pub dry_run: bool,
}

/// `<stem>_clean.csv` beside the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_clean.csv"))
}

/// Clean one CSV file with the given plan.
pub fn clean_file(
    input: &Path,
    plan: &CleaningPlan,
    options: &CleanOptions,
) -> Result<CleaningOutcome> {
    let file_span = info_span!("clean_file", input = %input.display());
    let _file_guard = file_span.enter();

    let original = read_csv_table(input).with_context(|| format!("read {}", input.display()))?;
    info!(
        rows = original.height(),
        columns = original.width(),
        rules = plan.rules.len(),
        "Loaded input"
    );

    let (mut cleaned, report) = apply_plan(&original, plan)?;

    let output = if options.dry_run {
        info!("Dry run; output not written");
        None
    } else {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input));
        write_csv_table(&mut cleaned, &path)
            .with_context(|| format!("write {}", path.display()))?;
        info!(output = %path.display(), "Wrote cleaned table");
        Some(path)
    };

    if let Some(path) = &options.report_json {
        write_report_json(&report, path)?;
        debug!(report = %path.display(), "Wrote JSON report");
    }

    Ok(CleaningOutcome {
        input: input.to_path_buf(),
        output,
        report_json: options.report_json.clone(),
        rows: cleaned.height(),
        report,
    })
}

/// Run the plan, sampling failed cells into the trace log.
fn apply_plan(df: &DataFrame, plan: &CleaningPlan) -> Result<(DataFrame, CleaningReport)> {
    let sample = tracing::enabled!(tracing::Level::TRACE);
    execute_plan_with(df, plan, |before, after, columns| {
        if sample {
            for column in columns {
                trace_failed_cells(before, after, column);
            }
        }
    })
    .context("apply cleaning plan")
}

/// Log up to [`FAILED_CELL_SAMPLES`] cells that had a value before and none after.
fn trace_failed_cells(before: &DataFrame, after: &DataFrame, report: &ColumnReport) {
    if report.newly_missing() == 0 {
        return;
    }
    let (Ok(source), Ok(output)) = (
        before.column(&report.column),
        after.column(&report.output_column),
    ) else {
        return;
    };
    let mut logged = 0usize;
    for row in 0..source.len() {
        if logged == FAILED_CELL_SAMPLES {
            break;
        }
        let raw = source.get(row).ok().and_then(any_to_cell);
        let cleaned = output.get(row).ok().and_then(any_to_cell);
        if let (Some(raw), None) = (raw, cleaned) {
            trace!(
                column = %report.column,
                row,
                value = redact_value(&raw),
                "Cell could not be parsed"
            );
            logged += 1;
        }
    }
}

fn write_report_json(report: &CleaningReport, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
