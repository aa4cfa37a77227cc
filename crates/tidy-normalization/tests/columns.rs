//! Column-application contract: cleaning never disturbs the rest of the frame.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

use tidy_normalization::{
    CleaningType, NormalizationError, Passphrase, PercentageMode, apply_transform,
};

fn text_df(columns: Vec<(&str, Vec<String>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

fn names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn any_transform() -> impl Strategy<Value = CleaningType> {
    let key = Passphrase::new("prop-key").unwrap();
    prop_oneof![
        (0usize..12).prop_map(|min_digits| CleaningType::Phone { min_digits }),
        Just(CleaningType::Monetary),
        Just(CleaningType::Percentage {
            mode: PercentageMode::Strict
        }),
        Just(CleaningType::Percentage {
            mode: PercentageMode::Lenient
        }),
        Just(CleaningType::Email),
        Just(CleaningType::Url),
        Just(CleaningType::Scientific),
        Just(CleaningType::Roman),
        Just(CleaningType::Encrypt {
            passphrase: key.clone()
        }),
        Just(CleaningType::Decrypt { passphrase: key }),
    ]
}

fn rows() -> impl Strategy<Value = Vec<(String, String, String)>> {
    prop::collection::vec(
        (
            "[a-z0-9]{0,6}",
            "[ -~]{0,20}",
            "[A-Z]{0,4}",
        ),
        0..24,
    )
}

proptest! {
    #[test]
    fn cleaning_preserves_shape_and_untouched_columns(
        rows in rows(),
        transform in any_transform(),
    ) {
        let (a, (b, c)): (Vec<String>, (Vec<String>, Vec<String>)) =
            rows.into_iter().map(|(a, b, c)| (a, (b, c))).unzip();
        let df = text_df(vec![("a", a), ("b", b), ("c", c)]);

        let (cleaned, reports) = apply_transform(&df, &["b"], &transform).unwrap();

        prop_assert_eq!(cleaned.height(), df.height());
        prop_assert_eq!(cleaned.width(), df.width());
        prop_assert_eq!(reports.len(), 1);
        prop_assert_eq!(reports[0].rows, df.height());

        let mut expected = names(&df);
        expected[1] = transform.output_column("b");
        prop_assert_eq!(names(&cleaned), expected);

        let output = transform.output_column("b");
        let untouched = cleaned.drop(&output).unwrap();
        prop_assert!(untouched.equals(&df.drop("b").unwrap()));
    }

    #[test]
    fn cipher_round_trips_printable_columns(
        values in prop::collection::vec("[ -~]{0,12}", 0..16),
        key in "[ -~]{1,8}",
    ) {
        let df = text_df(vec![("note", values)]);
        let key = Passphrase::new(key).unwrap();

        let (encrypted, _) = apply_transform(
            &df,
            &["note"],
            &CleaningType::Encrypt { passphrase: key.clone() },
        )
        .unwrap();
        let (decrypted, reports) = apply_transform(
            &encrypted,
            &["note_encrypted"],
            &CleaningType::Decrypt { passphrase: key },
        )
        .unwrap();

        prop_assert_eq!(reports[0].missing_after, 0);
        prop_assert!(decrypted.equals(&df));
    }

    #[test]
    fn unknown_column_is_always_structural(
        rows in rows(),
        transform in any_transform(),
        missing in "[d-z]{1,6}",
    ) {
        let (a, (b, c)): (Vec<String>, (Vec<String>, Vec<String>)) =
            rows.into_iter().map(|(a, b, c)| (a, (b, c))).unzip();
        let df = text_df(vec![("a", a), ("b", b), ("c", c)]);

        let result = apply_transform(&df, &["a", missing.as_str()], &transform);
        prop_assert!(matches!(result, Err(NormalizationError::ColumnNotFound(ref c)) if *c == missing));
    }
}

#[test]
fn encrypt_then_decrypt_restores_frame() {
    let df = text_df(vec![
        ("id", vec!["1".into(), "2".into()]),
        ("ssn", vec!["123-45-6789".into(), "987-65-4321".into()]),
    ]);
    let key = Passphrase::new("code name").unwrap();

    let (encrypted, _) = apply_transform(
        &df,
        &["ssn"],
        &CleaningType::Encrypt {
            passphrase: key.clone(),
        },
    )
    .unwrap();
    let (decrypted, _) = apply_transform(
        &encrypted,
        &["ssn_encrypted"],
        &CleaningType::Decrypt { passphrase: key },
    )
    .unwrap();

    assert!(decrypted.equals(&df));
}

#[test]
fn decrypt_with_wrong_key_does_not_fail() {
    let df = text_df(vec![("ssn", vec!["123-45-6789".into()])]);
    let right = Passphrase::new("right").unwrap();
    let wrong = Passphrase::new("wrong").unwrap();

    let (encrypted, _) =
        apply_transform(&df, &["ssn"], &CleaningType::Encrypt { passphrase: right }).unwrap();
    let (decrypted, reports) = apply_transform(
        &encrypted,
        &["ssn_encrypted"],
        &CleaningType::Decrypt { passphrase: wrong },
    )
    .unwrap();

    assert_eq!(reports[0].newly_missing(), 0);
    let value = decrypted.column("ssn").unwrap().str().unwrap().get(0);
    assert_ne!(value, Some("123-45-6789"));
}
