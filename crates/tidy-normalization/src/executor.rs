//! DataFrame cleaning execution.
//!
//! Applies cleaning rules column by column. Every call validates the whole
//! column selection before touching data, then rebuilds the frame with the
//! cleaned columns swapped in at their original positions. Row count, row
//! order and unselected columns are never changed.

use polars::prelude::*;
use tidy_common::{any_to_cell, any_to_text};

use crate::error::{NormalizationError, Result};
use crate::normalization::{
    decrypt_value, encrypt_value, normalize_email, normalize_monetary, normalize_percentage,
    normalize_phone, normalize_scientific, normalize_url, roman_to_int,
};
use crate::report::{CleaningReport, ColumnReport};
use crate::types::{CleaningPlan, CleaningRule, CleaningType, Passphrase, PercentageMode};

/// A validated column: where it sits and what it will be called afterwards.
#[derive(Debug)]
struct ColumnTarget {
    index: usize,
    source: String,
    output: String,
}

/// Reads one cell as text, `None` when the transform treats it as missing.
type CellReader = fn(AnyValue<'_>) -> Option<String>;

/// Execute a cleaning plan, rule by rule.
///
/// The first structural error aborts the plan and nothing is returned, so
/// the caller's frame is never left half-cleaned.
pub fn execute_plan(df: &DataFrame, plan: &CleaningPlan) -> Result<(DataFrame, CleaningReport)> {
    execute_plan_with(df, plan, |_, _, _| {})
}

/// [`execute_plan`], calling `after_rule(before, after, columns)` once each
/// rule has been applied.
pub fn execute_plan_with<F>(
    df: &DataFrame,
    plan: &CleaningPlan,
    mut after_rule: F,
) -> Result<(DataFrame, CleaningReport)>
where
    F: FnMut(&DataFrame, &DataFrame, &[ColumnReport]),
{
    let mut current = df.clone();
    let mut report = CleaningReport::default();

    for (index, rule) in plan.rules.iter().enumerate() {
        let _rule_span =
            tracing::info_span!("rule", index, transform = rule.transform.name()).entered();
        let (next, columns) = apply_rule(&current, rule)?;
        after_rule(&current, &next, &columns);
        current = next;
        report.extend(columns);
    }

    tracing::info!(
        rules = plan.rules.len(),
        columns = report.columns.len(),
        newly_missing = report.total_newly_missing(),
        "Cleaning plan applied"
    );

    Ok((current, report))
}

/// Apply a single rule to its columns.
pub fn apply_rule(df: &DataFrame, rule: &CleaningRule) -> Result<(DataFrame, Vec<ColumnReport>)> {
    apply_transform(df, &rule.columns, &rule.transform)
}

/// Apply a transform to the named columns.
///
/// Fails with [`NormalizationError::EmptyColumnSelection`] for an empty
/// selection, [`NormalizationError::ColumnNotFound`] for an unknown column and
/// [`NormalizationError::ColumnExists`] when a renamed output would clash.
/// A name listed twice is cleaned once.
pub fn apply_transform<S: AsRef<str>>(
    df: &DataFrame,
    columns: &[S],
    transform: &CleaningType,
) -> Result<(DataFrame, Vec<ColumnReport>)> {
    let targets = resolve_targets(df, columns, transform)?;
    let mut frame_columns: Vec<Column> = df.get_columns().to_vec();
    let mut reports = Vec::with_capacity(targets.len());

    for target in targets {
        let source = &frame_columns[target.index];
        let read = cell_reader(transform);
        let missing_before = count_missing(source, read)?;
        let cleaned = clean_column(source, &target.output, transform, read)?;
        let report = ColumnReport {
            column: target.source,
            output_column: target.output,
            transform: transform.name().to_string(),
            rows: cleaned.len(),
            missing_before,
            missing_after: cleaned.null_count(),
        };

        tracing::debug!(
            column = %report.column,
            output = %report.output_column,
            transform = %report.transform,
            rows = report.rows,
            "Cleaned column"
        );
        if report.newly_missing() > 0 {
            tracing::warn!(
                column = %report.column,
                transform = %report.transform,
                failed = report.newly_missing(),
                "Cells failed to parse, set to null"
            );
        }

        frame_columns[target.index] = cleaned;
        reports.push(report);
    }

    let cleaned = DataFrame::new(frame_columns)?;
    Ok((cleaned, reports))
}

/// Check the selection against the frame and work out output names.
fn resolve_targets<S: AsRef<str>>(
    df: &DataFrame,
    columns: &[S],
    transform: &CleaningType,
) -> Result<Vec<ColumnTarget>> {
    if columns.is_empty() {
        return Err(NormalizationError::EmptyColumnSelection);
    }

    let mut targets: Vec<ColumnTarget> = Vec::with_capacity(columns.len());
    for name in columns {
        let name = name.as_ref();
        if targets.iter().any(|t| t.source == name) {
            tracing::debug!(column = %name, "Column listed twice, cleaning once");
            continue;
        }

        let index = df
            .get_column_index(name)
            .ok_or_else(|| NormalizationError::ColumnNotFound(name.to_string()))?;
        let output = transform.output_column(name);

        if output != name {
            let clashes_with_frame = df.get_column_index(&output).is_some();
            let clashes_with_selection = targets.iter().any(|t| t.output == output);
            if clashes_with_frame || clashes_with_selection {
                return Err(NormalizationError::ColumnExists(output));
            }
        }

        targets.push(ColumnTarget {
            index,
            source: name.to_string(),
            output,
        });
    }

    Ok(targets)
}

/// The cipher keeps blank text; every other transform treats it as missing.
fn cell_reader(transform: &CleaningType) -> CellReader {
    match transform {
        CleaningType::Encrypt { .. } | CleaningType::Decrypt { .. } => any_to_text,
        _ => any_to_cell,
    }
}

/// Cells the transform will see as missing.
fn count_missing(column: &Column, read: CellReader) -> Result<usize> {
    let mut missing = 0;
    for idx in 0..column.len() {
        if read(column.get(idx)?).is_none() {
            missing += 1;
        }
    }
    Ok(missing)
}

/// Run one transform over one column.
fn clean_column(
    source: &Column,
    output: &str,
    transform: &CleaningType,
    read: CellReader,
) -> Result<Column> {
    match transform {
        CleaningType::Phone { min_digits } => {
            map_cells(source, output, read, |v| normalize_phone(v, *min_digits))
        }
        CleaningType::Monetary => map_cells(source, output, read, normalize_monetary),
        CleaningType::Percentage { mode } => {
            map_cells(source, output, read, |v| normalize_percentage(v, *mode))
        }
        CleaningType::Email => map_cells(source, output, read, normalize_email),
        CleaningType::Url => map_cells(source, output, read, normalize_url),
        CleaningType::Scientific => map_cells(source, output, read, normalize_scientific),
        CleaningType::Roman => map_cells(source, output, read, roman_to_int),
        CleaningType::Encrypt { passphrase } => {
            map_cells(source, output, read, |v| Some(encrypt_value(v, passphrase)))
        }
        CleaningType::Decrypt { passphrase } => {
            map_cells(source, output, read, |v| decrypt_value(v, passphrase))
        }
    }
}

/// Apply a per-cell rule; missing cells and failures become nulls.
fn map_cells<T, F>(source: &Column, output: &str, read: CellReader, rule: F) -> Result<Column>
where
    F: Fn(&str) -> Option<T>,
    Series: NamedFrom<Vec<Option<T>>, [Option<T>]>,
{
    let mut values: Vec<Option<T>> = Vec::with_capacity(source.len());

    for idx in 0..source.len() {
        let cell = read(source.get(idx)?);
        values.push(cell.as_deref().and_then(&rule));
    }

    Ok(Series::new(output.into(), values).into_column())
}

/// Keep only the digits of phone numbers; short numbers become null.
pub fn clean_phone_numbers<S: AsRef<str>>(
    df: &DataFrame,
    columns: &[S],
    min_digits: usize,
) -> Result<DataFrame> {
    apply_transform(df, columns, &CleaningType::Phone { min_digits }).map(|(df, _)| df)
}

/// Parse currency text to `Float64`.
pub fn clean_monetary_values<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<DataFrame> {
    apply_transform(df, columns, &CleaningType::Monetary).map(|(df, _)| df)
}

/// Convert `"50%"` style values to `Float64` fractions.
pub fn clean_percentages<S: AsRef<str>>(
    df: &DataFrame,
    columns: &[S],
    mode: PercentageMode,
) -> Result<DataFrame> {
    apply_transform(df, columns, &CleaningType::Percentage { mode }).map(|(df, _)| df)
}

/// Lowercase and validate email addresses.
pub fn clean_emails<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<DataFrame> {
    apply_transform(df, columns, &CleaningType::Email).map(|(df, _)| df)
}

/// Strip scheme, `www.` and one trailing slash from URLs.
pub fn clean_urls<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<DataFrame> {
    apply_transform(df, columns, &CleaningType::Url).map(|(df, _)| df)
}

/// Parse scientific notation to `Float64`.
pub fn clean_scientific_notation<S: AsRef<str>>(
    df: &DataFrame,
    columns: &[S],
) -> Result<DataFrame> {
    apply_transform(df, columns, &CleaningType::Scientific).map(|(df, _)| df)
}

/// Convert roman numerals to `Int64`.
pub fn clean_roman_numerals<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<DataFrame> {
    apply_transform(df, columns, &CleaningType::Roman).map(|(df, _)| df)
}

/// Encrypt columns with the toy cipher, renaming `c` to `c_encrypted`.
///
/// See [`crate::normalization::cipher`] for why this must not protect
/// anything that matters.
pub fn encrypt_columns<S: AsRef<str>>(
    df: &DataFrame,
    columns: &[S],
    passphrase: &Passphrase,
) -> Result<DataFrame> {
    let transform = CleaningType::Encrypt {
        passphrase: passphrase.clone(),
    };
    apply_transform(df, columns, &transform).map(|(df, _)| df)
}

/// Decrypt columns, renaming `c_encrypted` back to `c`.
///
/// A wrong passphrase is not detected; the columns fill with garbage.
pub fn decrypt_columns<S: AsRef<str>>(
    df: &DataFrame,
    columns: &[S],
    passphrase: &Passphrase,
) -> Result<DataFrame> {
    let transform = CleaningType::Decrypt {
        passphrase: passphrase.clone(),
    };
    apply_transform(df, columns, &transform).map(|(df, _)| df)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        df! {
            "id" => &["1", "2", "3"],
            "phone" => &["+1 (555) 123-4567", "555-12", ""],
            "price" => &["$1,234.50", "(50)", "free"],
        }
        .unwrap()
    }

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_phone_column() {
        let df = sample_df();
        let result = clean_phone_numbers(&df, &["phone"], 7).unwrap();
        let phone = result.column("phone").unwrap().str().unwrap();

        assert_eq!(phone.get(0), Some("15551234567"));
        assert_eq!(phone.get(1), None);
        assert_eq!(phone.get(2), None);
    }

    #[test]
    fn test_monetary_column_is_float() {
        let df = sample_df();
        let result = clean_monetary_values(&df, &["price"]).unwrap();
        let price = result.column("price").unwrap();

        assert_eq!(price.dtype(), &DataType::Float64);
        let price = price.f64().unwrap();
        assert_eq!(price.get(0), Some(1234.5));
        assert_eq!(price.get(1), Some(-50.0));
        assert_eq!(price.get(2), None);
    }

    #[test]
    fn test_roman_column_is_int() {
        let df = df! { "n" => &["IV", "CM", "VX"] }.unwrap();
        let result = clean_roman_numerals(&df, &["n"]).unwrap();
        let n = result.column("n").unwrap();

        assert_eq!(n.dtype(), &DataType::Int64);
        let n = n.i64().unwrap();
        assert_eq!(n.get(0), Some(4));
        assert_eq!(n.get(1), Some(900));
        assert_eq!(n.get(2), None);
    }

    #[test]
    fn test_typed_input_is_rendered_as_text() {
        let df = df! { "phone" => &[5551234567i64, 12] }.unwrap();
        let result = clean_phone_numbers(&df, &["phone"], 7).unwrap();
        let phone = result.column("phone").unwrap().str().unwrap();

        assert_eq!(phone.get(0), Some("5551234567"));
        assert_eq!(phone.get(1), None);
    }

    #[test]
    fn test_untouched_columns_and_order() {
        let df = sample_df();
        let result = clean_monetary_values(&df, &["price"]).unwrap();

        assert_eq!(result.height(), df.height());
        assert_eq!(names(&result), names(&df));
        let untouched = result.drop("price").unwrap();
        assert!(untouched.equals(&df.drop("price").unwrap()));
    }

    #[test]
    fn test_unknown_column_aborts() {
        let df = sample_df();
        let err = clean_emails(&df, &["phone", "missing"]).unwrap_err();
        assert!(matches!(err, NormalizationError::ColumnNotFound(ref c) if c == "missing"));
    }

    #[test]
    fn test_empty_selection() {
        let df = sample_df();
        let none: [&str; 0] = [];
        let err = clean_urls(&df, &none).unwrap_err();
        assert!(matches!(err, NormalizationError::EmptyColumnSelection));
    }

    #[test]
    fn test_duplicate_selection_cleaned_once() {
        let df = df! { "n" => &["IV"] }.unwrap();
        let (result, reports) = apply_transform(&df, &["n", "n"], &CleaningType::Roman).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(result.column("n").unwrap().i64().unwrap().get(0), Some(4));
    }

    #[test]
    fn test_encrypt_renames_in_place() {
        let df = sample_df();
        let key = Passphrase::new("code").unwrap();
        let encrypted = encrypt_columns(&df, &["phone"], &key).unwrap();

        assert_eq!(names(&encrypted), vec!["id", "phone_encrypted", "price"]);

        let decrypted = decrypt_columns(&encrypted, &["phone_encrypted"], &key).unwrap();
        assert_eq!(names(&decrypted), names(&df));
        let phone = decrypted.column("phone").unwrap().str().unwrap();
        assert_eq!(phone.get(0), Some("+1 (555) 123-4567"));
        assert_eq!(phone.get(1), Some("555-12"));
        assert_eq!(phone.get(2), Some(""));
    }

    #[test]
    fn test_cipher_keeps_blank_cells() {
        let df = df! {
            "note" => &[Some(" "), Some("  x  "), Some(""), None],
        }
        .unwrap();
        let key = Passphrase::new("k").unwrap();

        let (encrypted, reports) = apply_transform(
            &df,
            &["note"],
            &CleaningType::Encrypt {
                passphrase: key.clone(),
            },
        )
        .unwrap();
        assert_eq!(reports[0].missing_before, 1);
        assert_eq!(reports[0].missing_after, 1);

        let decrypted = decrypt_columns(&encrypted, &["note_encrypted"], &key).unwrap();
        let note: Vec<Option<&str>> = decrypted
            .column("note")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(note, vec![Some(" "), Some("  x  "), Some(""), None]);
    }

    #[test]
    fn test_blank_cells_missing_for_value_rules() {
        let df = df! { "site" => &[" ", "example.com"] }.unwrap();
        let (result, reports) = apply_transform(&df, &["site"], &CleaningType::Url).unwrap();

        assert_eq!(reports[0].missing_before, 1);
        assert_eq!(result.column("site").unwrap().str().unwrap().get(0), None);
    }

    #[test]
    fn test_encrypt_refuses_to_overwrite() {
        let df = df! {
            "ssn" => &["123"],
            "ssn_encrypted" => &["old"],
        }
        .unwrap();
        let key = Passphrase::new("k").unwrap();
        let err = encrypt_columns(&df, &["ssn"], &key).unwrap_err();
        assert!(matches!(err, NormalizationError::ColumnExists(ref c) if c == "ssn_encrypted"));
    }

    #[test]
    fn test_report_counts() {
        let df = sample_df();
        let rule = CleaningRule::new(CleaningType::Monetary, ["price", "phone"]);
        let (_, reports) = apply_rule(&df, &rule).unwrap();

        assert_eq!(reports[0].column, "price");
        assert_eq!(reports[0].missing_before, 0);
        assert_eq!(reports[0].missing_after, 1);
        assert_eq!(reports[0].newly_missing(), 1);

        // "+1 (555) 123-4567" and "555-12" are not amounts; "" was already missing
        assert_eq!(reports[1].missing_before, 1);
        assert_eq!(reports[1].missing_after, 3);
    }

    #[test]
    fn test_execute_plan_in_order() {
        let df = sample_df();
        let key = Passphrase::new("k").unwrap();
        let plan = CleaningPlan::new()
            .with_rule(CleaningRule::new(
                CleaningType::Phone { min_digits: 7 },
                ["phone"],
            ))
            .with_rule(CleaningRule::new(
                CleaningType::Encrypt { passphrase: key },
                ["phone"],
            ));

        let (result, report) = execute_plan(&df, &plan).unwrap();

        assert_eq!(names(&result), vec!["id", "phone_encrypted", "price"]);
        assert_eq!(report.columns.len(), 2);
        assert_eq!(report.columns[0].newly_missing(), 1);
        assert_eq!(report.columns[1].newly_missing(), 0);
    }

    #[test]
    fn test_execute_plan_with_sees_each_rule() {
        let df = sample_df();
        let plan = CleaningPlan::new()
            .with_rule(CleaningRule::new(CleaningType::Monetary, ["price"]))
            .with_rule(CleaningRule::new(CleaningType::Url, ["id"]));
        let mut seen = Vec::new();

        let (_, report) = execute_plan_with(&df, &plan, |before, after, columns| {
            assert_eq!(before.height(), after.height());
            seen.extend(columns.iter().map(|c| c.column.clone()));
        })
        .unwrap();

        assert_eq!(seen, vec!["price", "id"]);
        assert_eq!(report.columns.len(), 2);
    }

    #[test]
    fn test_execute_plan_aborts_on_structural_error() {
        let df = sample_df();
        let plan = CleaningPlan::new()
            .with_rule(CleaningRule::new(CleaningType::Url, ["id"]))
            .with_rule(CleaningRule::new(CleaningType::Url, ["website"]));

        let err = execute_plan(&df, &plan).unwrap_err();
        assert!(matches!(err, NormalizationError::ColumnNotFound(ref c) if c == "website"));
    }
}
