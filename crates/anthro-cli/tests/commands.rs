//! Integration tests for the command layer, run against the fixture tables.

use std::path::PathBuf;

use anthro_cli::cli::{AssessArgs, ZscoreArgs};
use anthro_cli::commands::{load_registry, run_assess, run_tables, run_zscore};
use anthro_cli::summary::{assessment_table, tables_table, value_with_unit};
use anthro_core::Outcome;
use anthro_model::{AnthroError, Category, Indicator};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures/reference")
}

fn assess_args(gender: &str, age_months: i64) -> AssessArgs {
    AssessArgs {
        gender: gender.to_string(),
        age_months,
        height_cm: None,
        weight_kg: None,
        head_circumference_cm: None,
        muac_cm: None,
        json: false,
    }
}

#[test]
fn assess_newborn_girl() {
    let args = AssessArgs {
        height_cm: Some(50.0),
        weight_kg: Some(3.0),
        ..assess_args("female", 0)
    };
    let assessment = run_assess(&args, Some(fixtures_dir().as_path())).expect("assess");
    assert!(!assessment.has_failures());
    let wfh = assessment.entry("WeightForHeight").expect("wfh entry");
    assert!(matches!(
        wfh.outcome,
        Outcome::Categorized {
            z_score: Some(z),
            category: Category::NormalWeightForHeight,
            ..
        } if z == -1.3
    ));

    let rendered = assessment_table(&assessment).to_string();
    assert!(rendered.contains("WeightForHeight"));
    assert!(rendered.contains("-1.3"));
    assert!(rendered.contains("3 kg"));
    assert!(rendered.contains("50 cm"));
}

#[test]
fn assess_reports_invalid_gender_code_per_indicator() {
    let args = AssessArgs {
        weight_kg: Some(8.0),
        muac_cm: Some(14.0),
        ..assess_args("3", 12)
    };
    let assessment = run_assess(&args, Some(fixtures_dir().as_path())).expect("assess");
    assert_eq!(assessment.failure_count(), 2);
    for entry in &assessment.entries {
        assert!(matches!(
            entry.outcome.error(),
            Some(AnthroError::InvalidGender { .. })
        ));
    }
}

#[test]
fn assess_rejects_unknown_gender_word() {
    let err = run_assess(&assess_args("unknown", 12), Some(fixtures_dir().as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("--gender"));
}

#[test]
fn zscore_accepts_abbreviations() {
    let args = ZscoreArgs {
        indicator: "wfl".to_string(),
        value: 3.0,
        gender: "1".to_string(),
        age_months: 0,
        height_cm: Some(50.0),
    };
    let report = run_zscore(&args, Some(fixtures_dir().as_path())).expect("zscore");
    assert_eq!(report.indicator, Indicator::WeightForHeight);
    assert_eq!(report.score.z_score, -1.3);
    assert_eq!(report.score.category, Category::NormalWeightForHeight);
}

#[test]
fn zscore_without_height_fails_for_weight_for_height() {
    let args = ZscoreArgs {
        indicator: "WeightForHeight".to_string(),
        value: 3.0,
        gender: "girl".to_string(),
        age_months: 0,
        height_cm: None,
    };
    let err = run_zscore(&args, Some(fixtures_dir().as_path())).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AnthroError>(),
        Some(AnthroError::MissingHeight { .. })
    ));
}

#[test]
fn tables_lists_every_fixture() {
    let summary = run_tables(Some(fixtures_dir().as_path())).expect("tables");
    assert!(summary.is_complete());
    assert_eq!(summary.tables.len(), 10);
    let rendered = tables_table(&summary).to_string();
    assert!(rendered.contains("lhfa"));
    assert!(rendered.contains("wfh"));
}

#[test]
fn missing_reference_dir_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nowhere");
    let err = load_registry(Some(missing.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("load reference tables"));
}

#[test]
fn values_carry_their_indicator_unit() {
    assert_eq!(value_with_unit("WeightForAge", 6.5), "6.5 kg");
    assert_eq!(value_with_unit("HeadCircumferenceForAge", 35.0), "35 cm");
    assert_eq!(value_with_unit("MuacForAge", 12.6), "12.6 cm");
}
