use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use anthro_core::GrowthAssessor;
use anthro_core::validator::{check_gender, check_indicator};
use anthro_core::{Assessment, Score};
use anthro_model::{Gender, Indicator, Measurement, Subject};
use anthro_reference::{ReferenceRegistry, RegistrySummary, resolve_reference_dir};

use crate::cli::{AssessArgs, ZscoreArgs};
use crate::logging::redact_value;

/// Result of `anthro zscore`.
#[derive(Debug, Clone, Serialize)]
pub struct ZscoreReport {
    pub indicator: Indicator,
    pub value: f64,
    pub gender: Gender,
    pub age_months: i64,
    #[serde(flatten)]
    pub score: Score,
}

/// Turn a `--gender` argument into the raw code the assessor checks.
///
/// Numbers pass through untouched so an unknown code is reported by the
/// validator; words go through [`Gender`]'s parser.
pub fn parse_gender_code(raw: &str) -> anthro_model::Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(code) => Ok(code),
        Err(_) => raw.parse::<Gender>().map(|gender| gender.code()),
    }
}

pub fn load_registry(reference_dir: Option<&Path>) -> Result<Arc<ReferenceRegistry>> {
    let dir = resolve_reference_dir(reference_dir);
    let span = info_span!("load_reference", dir = %dir.display());
    let _guard = span.enter();
    let registry = ReferenceRegistry::load_dir(&dir)
        .with_context(|| format!("load reference tables from {}", dir.display()))?;
    let summary = registry.summary();
    if !summary.is_complete() {
        warn!(
            missing = summary.missing.len(),
            "reference directory is incomplete; affected indicators will fail"
        );
    }
    Ok(Arc::new(registry))
}

pub fn run_assess(args: &AssessArgs, reference_dir: Option<&Path>) -> Result<Assessment> {
    let registry = load_registry(reference_dir)?;
    let gender = parse_gender_code(&args.gender).context("parse --gender")?;
    let subject = Subject {
        gender,
        age_months: args.age_months,
        height_cm: args.height_cm,
        weight_kg: args.weight_kg,
        head_circumference_cm: args.head_circumference_cm,
        muac_cm: args.muac_cm,
    };
    debug!(
        gender,
        age_months = args.age_months,
        height_cm = %redact_value(format!("{:?}", subject.height_cm)),
        weight_kg = %redact_value(format!("{:?}", subject.weight_kg)),
        "assessing subject"
    );
    let assessment = GrowthAssessor::new(registry).assess(&subject);
    info!(
        indicators = assessment.entries.len(),
        failures = assessment.failure_count(),
        "assessment complete"
    );
    Ok(assessment)
}

pub fn run_zscore(args: &ZscoreArgs, reference_dir: Option<&Path>) -> Result<ZscoreReport> {
    let indicator = check_indicator(&args.indicator).context("parse --indicator")?;
    let gender_code = parse_gender_code(&args.gender).context("parse --gender")?;
    let gender = check_gender(gender_code)?;
    let registry = load_registry(reference_dir)?;
    let mut measurement = Measurement::new(indicator, args.value, gender, args.age_months);
    measurement.height_cm = args.height_cm;
    debug!(
        indicator = %indicator,
        value = %redact_value(args.value),
        "scoring measurement"
    );
    let score = GrowthAssessor::new(registry)
        .score(&measurement)
        .with_context(|| format!("score {indicator}"))?;
    Ok(ZscoreReport {
        indicator,
        value: args.value,
        gender,
        age_months: args.age_months,
        score,
    })
}

pub fn run_tables(reference_dir: Option<&Path>) -> Result<RegistrySummary> {
    let registry = load_registry(reference_dir)?;
    Ok(registry.summary())
}
