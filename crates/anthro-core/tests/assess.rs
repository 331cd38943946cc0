use std::path::PathBuf;
use std::sync::Arc;

use anthro_core::{GrowthAssessor, MUAC_FOR_AGE, Outcome, lookup};
use anthro_model::{
    AnthroError, Category, Gender, Indicator, Measurement, ReferenceProvider, ReferenceRow, Subject,
};
use anthro_reference::{ReferenceRegistry, ReferenceTable, TableKind};

const FEMALE: i64 = 1;
const MALE: i64 = 2;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures/reference")
}

fn assessor() -> GrowthAssessor<ReferenceRegistry> {
    let registry = ReferenceRegistry::load_dir(&fixtures_dir()).expect("load fixtures");
    GrowthAssessor::new(Arc::new(registry))
}

#[test]
fn newborn_girl_weight_for_length_golden() {
    let assessor = assessor();
    let row = lookup(
        assessor.provider(),
        Indicator::WeightForHeight,
        Gender::Female,
        0,
        Some(50.0),
    )
    .expect("row");
    assert_eq!(row.key, 50.0);
    assert_eq!(row.get("M"), Some(3.3518));

    let measurement =
        Measurement::new(Indicator::WeightForHeight, 3.0, Gender::Female, 0).with_height(50.0);
    assert_eq!(assessor.z_score(&measurement), Ok(-1.3));
    assert_eq!(
        assessor.categorize_weight_for_height(3.0, FEMALE, 50.0, 0),
        Ok(Category::NormalWeightForHeight)
    );
}

#[test]
fn head_circumference_for_age() {
    let assessor = assessor();
    assert_eq!(
        assessor.categorize_head_circumference_for_age(30.0, FEMALE, 0),
        Ok(Category::SevereMicrocephaly)
    );
    assert_eq!(
        assessor.categorize_head_circumference_for_age(55.0, MALE, 60),
        Ok(Category::Macrocephaly)
    );
}

#[test]
fn height_for_age() {
    let assessor = assessor();
    assert_eq!(
        assessor.categorize_height_for_age(70.0, MALE, 12),
        Ok(Category::ModerateStunting)
    );
    // Raw z-score 2.97 rounds to 3.0, the top of the normal band
    assert_eq!(
        assessor.categorize_height_for_age(95.0, FEMALE, 24),
        Ok(Category::NormalHeight)
    );
}

#[test]
fn weight_for_age() {
    let assessor = assessor();
    assert_eq!(
        assessor.categorize_weight_for_age(10.0, MALE, 6),
        Ok(Category::WeightOutOfRange)
    );
    assert_eq!(
        assessor.categorize_weight_for_age(6.5, FEMALE, 12),
        Ok(Category::ModerateUnderweight)
    );
}

#[test]
fn weight_for_height_matches_rows_within_tolerance() {
    let assessor = assessor();
    // 50.2 cm matches the 50.0 row; z = -2.95 rounds to -3.0
    assert_eq!(
        assessor.categorize_weight_for_height(2.6, FEMALE, 50.2, 0),
        Ok(Category::ModerateAcuteMalnutrition)
    );
    // 49.8 cm matches the 49.5 row
    assert_eq!(
        assessor.categorize_weight_for_height(3.9, FEMALE, 49.8, 0),
        Ok(Category::AtRiskOfOverweight)
    );
    assert_eq!(
        assessor.categorize_weight_for_height(4.4, MALE, 50.0, 3),
        Ok(Category::Obese)
    );
}

#[test]
fn weight_for_height_switches_to_height_table_after_two_years() {
    let assessor = assessor();
    let at_24 =
        Measurement::new(Indicator::WeightForHeight, 9.0, Gender::Female, 24).with_height(66.0);
    let at_25 = Measurement { age_months: 25, ..at_24 };
    assert_eq!(assessor.z_score(&at_24), Ok(2.0));
    assert_eq!(assessor.z_score(&at_25), Ok(1.8));
}

#[test]
fn invalid_inputs_fail_before_lookup() {
    let assessor = assessor();
    assert_eq!(
        assessor.categorize_weight_for_age(8.0, 3, 12),
        Err(AnthroError::InvalidGender {
            code: "3".to_string()
        })
    );
    assert_eq!(
        assessor.categorize_height_for_age(80.0, FEMALE, 61),
        Err(AnthroError::InvalidAge { age_months: 61 })
    );
    assert_eq!(
        assessor.categorize_weight_for_height(3.0, MALE, 40.0, 3),
        Err(AnthroError::InvalidHeight {
            height_cm: 40.0,
            age_months: 3,
            min_cm: 45.0,
            max_cm: 110.0,
        })
    );
    assert_eq!(
        assessor.categorize_weight_for_age(0.0, MALE, 3),
        Err(AnthroError::InvalidMeasurement { value: 0.0 })
    );
}

#[test]
fn gender_is_checked_before_age() {
    let assessor = assessor();
    let err = assessor
        .categorize_head_circumference_for_age(40.0, 0, 99)
        .unwrap_err();
    assert_eq!(err.code(), "invalid_gender");
}

#[test]
fn missing_month_is_row_not_found() {
    let assessor = assessor();
    assert_eq!(
        assessor.categorize_weight_for_age(9.0, MALE, 13),
        Err(AnthroError::RowNotFound {
            indicator: Indicator::WeightForAge,
            gender: Gender::Male,
            key: 13.0,
        })
    );
}

#[test]
fn missing_table_is_empty_table() {
    let registry = ReferenceRegistry::new()
        .with_table(ReferenceTable {
            kind: TableKind::Wfa,
            gender: Gender::Female,
            source: "inline".to_string(),
            rows: Vec::new(),
        })
        .expect("registry");
    let assessor = GrowthAssessor::new(Arc::new(registry));
    let expected = |gender| AnthroError::EmptyTable {
        indicator: Indicator::WeightForAge,
        gender,
        age_months: 0,
    };
    assert_eq!(
        assessor.categorize_weight_for_age(3.0, FEMALE, 0),
        Err(expected(Gender::Female))
    );
    assert_eq!(
        assessor.categorize_weight_for_age(3.0, MALE, 0),
        Err(expected(Gender::Male))
    );
}

/// Every indicator gets the same row with zero median and spread.
struct DegenerateRows(Vec<ReferenceRow>);

impl ReferenceProvider for DegenerateRows {
    fn rows(&self, _: Indicator, _: Gender, _: i64) -> &[ReferenceRow] {
        &self.0
    }
}

#[test]
fn degenerate_reference_row_is_an_error_not_a_category() {
    let row = ReferenceRow::new(6.0)
        .with("L", -0.35)
        .with("M", 0.0)
        .with("S", 0.08)
        .with("SD", 0.0);
    let assessor = GrowthAssessor::new(Arc::new(DegenerateRows(vec![row])));
    let expected = |indicator: Indicator, column: &str| -> anthro_model::Result<Category> {
        Err(AnthroError::InvalidReferenceRow {
            indicator,
            key: 6.0,
            column: column.to_string(),
        })
    };
    assert_eq!(
        assessor.categorize_weight_for_age(7.5, MALE, 6),
        expected(Indicator::WeightForAge, "M")
    );
    assert_eq!(
        assessor.categorize_height_for_age(67.0, MALE, 6),
        expected(Indicator::HeightForAge, "SD")
    );
    assert_eq!(
        assessor.categorize_head_circumference_for_age(43.0, FEMALE, 6),
        expected(Indicator::HeadCircumferenceForAge, "SD")
    );
}

#[test]
fn muac_for_age() {
    let assessor = assessor();
    assert_eq!(
        assessor.categorize_muac_for_age(11.0, 5),
        Ok(Category::MuacInsufficientEvidence)
    );
    assert_eq!(
        assessor.categorize_muac_for_age(11.0, 18),
        Ok(Category::MuacSevereAcuteMalnutrition)
    );
    assert_eq!(
        assessor.categorize_muac_for_age(12.5, 18),
        Err(AnthroError::CategorizationGap {
            subject: MUAC_FOR_AGE.to_string(),
            value: 12.5,
        })
    );
    assert_eq!(
        assessor.categorize_muac_for_age(0.0, 3),
        Ok(Category::MuacInsufficientEvidence)
    );
    assert_eq!(
        assessor.categorize_muac_for_age(13.0, -1),
        Err(AnthroError::InvalidAge { age_months: -1 })
    );
}

#[test]
fn repeated_calls_are_identical() {
    let assessor = assessor();
    let first = assessor.categorize_weight_for_height(3.0, FEMALE, 50.0, 0);
    let second = assessor.clone().categorize_weight_for_height(3.0, FEMALE, 50.0, 0);
    assert_eq!(first, second);
}

#[test]
fn assessment_reports_each_indicator_independently() {
    let assessor = assessor();
    let subject = Subject {
        gender: FEMALE,
        age_months: 0,
        height_cm: Some(50.0),
        weight_kg: Some(3.0),
        head_circumference_cm: Some(30.0),
        muac_cm: Some(10.0),
    };
    let assessment = assessor.assess(&subject);

    let names: Vec<_> = assessment.entries.iter().map(|e| e.indicator).collect();
    assert_eq!(
        names,
        vec![
            "HeadCircumferenceForAge",
            "HeightForAge",
            "WeightForAge",
            "WeightForHeight",
            "MuacForAge",
        ]
    );
    assert!(!assessment.has_failures());
    assert_eq!(
        assessment
            .entry("WeightForHeight")
            .and_then(|e| e.outcome.category()),
        Some(Category::NormalWeightForHeight)
    );
    assert_eq!(
        assessment.entry("MuacForAge").and_then(|e| e.outcome.category()),
        Some(Category::MuacInsufficientEvidence)
    );
    let flagged: Vec<_> = assessment.flagged().map(|e| e.indicator).collect();
    assert_eq!(flagged, vec!["HeadCircumferenceForAge"]);
}

#[test]
fn assessment_keeps_going_after_a_failure() {
    let assessor = assessor();
    let subject = Subject {
        gender: MALE,
        age_months: 13,
        height_cm: Some(66.0),
        weight_kg: Some(9.0),
        muac_cm: Some(12.5),
        ..Subject::default()
    };
    let assessment = assessor.assess(&subject);
    // The fixture age tables skip month 13; weight-for-length is keyed by length
    assert_eq!(assessment.failure_count(), 3);
    let hfa = assessment.entry("HeightForAge").expect("hfa entry");
    assert!(matches!(hfa.outcome, Outcome::Failed { code: "row_not_found", .. }));
    let wfh = assessment.entry("WeightForHeight").expect("wfh entry");
    assert_eq!(wfh.outcome.category(), Some(Category::AtRiskOfOverweight));
    let muac = assessment.entry("MuacForAge").expect("muac entry");
    assert!(matches!(
        muac.outcome.error(),
        Some(AnthroError::CategorizationGap { .. })
    ));
}

#[test]
fn assessment_entry_serializes_flat() {
    let assessor = assessor();
    let subject = Subject {
        gender: FEMALE,
        age_months: 0,
        height_cm: Some(50.0),
        weight_kg: Some(3.0),
        ..Subject::default()
    };
    let assessment = assessor.assess(&subject);
    let entry = assessment.entry("WeightForHeight").expect("wfh entry");
    let json = serde_json::to_string_pretty(entry).expect("serialize entry");
    insta::assert_snapshot!(json, @r#"
    {
      "indicator": "WeightForHeight",
      "value": 3.0,
      "status": "categorized",
      "z_score": -1.3,
      "category": "NormalWeightForHeight",
      "label": "Normal"
    }
    "#);
}
