use anyhow::{Context, Result};
use comfy_table::Table;

use tidy_cli::pipeline::{CleanOptions, clean_file};
use tidy_cli::plan::{TRANSFORM_CATALOG, load_plan};
use tidy_cli::types::CleaningOutcome;
use tidy_normalization::CleaningPlan;

use crate::cli::{ApplyArgs, IoArgs, RunArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_transforms() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Transform"), header_cell("Description")]);
    apply_table_style(&mut table);
    for (name, description) in TRANSFORM_CATALOG {
        table.add_row(vec![name, description]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_apply(args: &ApplyArgs) -> Result<CleaningOutcome> {
    let rule = args.to_rule()?;
    let plan = CleaningPlan::new().with_rule(rule);
    clean_file(&args.io.input, &plan, &clean_options(&args.io))
}

pub fn run_plan(args: &RunArgs) -> Result<CleaningOutcome> {
    let plan = load_plan(&args.plan)?;
    clean_file(&args.io.input, &plan, &clean_options(&args.io))
        .with_context(|| format!("apply plan {}", args.plan.display()))
}

fn clean_options(io: &IoArgs) -> CleanOptions {
    CleanOptions {
        output: io.output.clone(),
        report_json: io.report_json.clone(),
        dry_run: io.dry_run,
    }
}
