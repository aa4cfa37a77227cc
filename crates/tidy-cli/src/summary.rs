use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tidy_cli::types::CleaningOutcome;
use tidy_normalization::ColumnReport;

pub fn print_summary(outcome: &CleaningOutcome) {
    println!("Input: {}", outcome.input.display());
    match &outcome.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, not written)"),
    }
    if let Some(path) = &outcome.report_json {
        println!("Report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Transform"),
        header_cell("Rows"),
        header_cell("Missing before"),
        header_cell("Missing after"),
        header_cell("Failed"),
    ]);
    apply_table_style(&mut table);
    for index in 2..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_before = 0usize;
    let mut total_after = 0usize;
    for report in &outcome.report.columns {
        total_before += report.missing_before;
        total_after += report.missing_after;
        table.add_row(vec![
            column_cell(report),
            Cell::new(&report.transform),
            Cell::new(report.rows),
            dim_cell(report.missing_before),
            Cell::new(report.missing_after),
            count_cell(report.newly_missing(), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(outcome.rows).add_attribute(Attribute::Bold),
        dim_cell(total_before),
        Cell::new(total_after).add_attribute(Attribute::Bold),
        count_cell(outcome.report.total_newly_missing(), Color::Yellow)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn column_cell(report: &ColumnReport) -> Cell {
    if report.column == report.output_column {
        Cell::new(&report.column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(format!("{} -> {}", report.column, report.output_column))
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
