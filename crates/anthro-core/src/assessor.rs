//! Growth assessment service.
//!
//! [`GrowthAssessor`] holds the reference data it scores against and
//! exposes one operation per indicator, each taking the raw inputs a health
//! worker records. Every operation returns either a category or the first
//! error encountered, never both.

use std::sync::Arc;

use anthro_model::{Category, Indicator, Measurement, ReferenceProvider, Result, Subject};
use serde::Serialize;
use tracing::info_span;

use crate::categorize::{MUAC_FOR_AGE, categorize, categorize_muac};
use crate::report::{Assessment, AssessmentEntry};
use crate::validator::{check_age_months, check_gender, check_height};
use crate::zscore::z_score;

/// A rounded z-score and the category it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub z_score: f64,
    pub category: Category,
}

/// Scores measurements against an injected reference provider.
///
/// The provider is shared, immutable state; clones of the assessor share
/// the same provider.
#[derive(Debug)]
pub struct GrowthAssessor<P> {
    provider: Arc<P>,
}

impl<P> Clone for GrowthAssessor<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P: ReferenceProvider> GrowthAssessor<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Rounded z-score for a typed measurement.
    pub fn z_score(&self, measurement: &Measurement) -> Result<f64> {
        z_score(self.provider.as_ref(), measurement)
    }

    /// Rounded z-score plus category for a typed measurement.
    pub fn score(&self, measurement: &Measurement) -> Result<Score> {
        let z = self.z_score(measurement)?;
        let category = categorize(measurement.indicator, z)?;
        Ok(Score {
            z_score: z,
            category,
        })
    }

    fn score_raw(
        &self,
        indicator: Indicator,
        value: f64,
        gender: i64,
        age_months: i64,
        height_cm: Option<f64>,
    ) -> Result<Score> {
        let gender = check_gender(gender)?;
        check_age_months(age_months)?;
        if let Some(height_cm) = height_cm {
            check_height(height_cm, age_months)?;
        }
        let mut measurement = Measurement::new(indicator, value, gender, age_months);
        measurement.height_cm = height_cm;
        self.score(&measurement)
    }

    /// Head circumference (cm) for age.
    pub fn categorize_head_circumference_for_age(
        &self,
        value_cm: f64,
        gender: i64,
        age_months: i64,
    ) -> Result<Category> {
        self.score_raw(
            Indicator::HeadCircumferenceForAge,
            value_cm,
            gender,
            age_months,
            None,
        )
        .map(|score| score.category)
    }

    /// Length/height (cm) for age.
    pub fn categorize_height_for_age(
        &self,
        height_cm: f64,
        gender: i64,
        age_months: i64,
    ) -> Result<Category> {
        self.score_raw(Indicator::HeightForAge, height_cm, gender, age_months, None)
            .map(|score| score.category)
    }

    /// Weight (kg) for age.
    pub fn categorize_weight_for_age(
        &self,
        weight_kg: f64,
        gender: i64,
        age_months: i64,
    ) -> Result<Category> {
        self.score_raw(Indicator::WeightForAge, weight_kg, gender, age_months, None)
            .map(|score| score.category)
    }

    /// Weight (kg) for length/height (cm). Children up to 24 months are
    /// scored against the length table, older children against the height
    /// table.
    pub fn categorize_weight_for_height(
        &self,
        weight_kg: f64,
        gender: i64,
        height_cm: f64,
        age_months: i64,
    ) -> Result<Category> {
        self.score_raw(
            Indicator::WeightForHeight,
            weight_kg,
            gender,
            age_months,
            Some(height_cm),
        )
        .map(|score| score.category)
    }

    /// Mid-upper arm circumference (cm) for age. Needs no reference data.
    pub fn categorize_muac_for_age(&self, muac_cm: f64, age_months: i64) -> Result<Category> {
        categorize_muac(muac_cm, age_months)
    }

    /// Score every measurement recorded for `subject`.
    ///
    /// Each indicator succeeds or fails on its own; a failure in one does
    /// not prevent the others from being reported.
    pub fn assess(&self, subject: &Subject) -> Assessment {
        let span = info_span!("assess", age_months = subject.age_months);
        let _guard = span.enter();

        let mut entries = Vec::new();
        let mut push = |indicator: Indicator, value: f64, height_cm: Option<f64>| {
            let result = self.score_raw(
                indicator,
                value,
                subject.gender,
                subject.age_months,
                height_cm,
            );
            entries.push(AssessmentEntry::from_score(indicator.as_str(), value, result));
        };

        if let Some(head) = subject.head_circumference_cm {
            push(Indicator::HeadCircumferenceForAge, head, None);
        }
        if let Some(height) = subject.height_cm {
            push(Indicator::HeightForAge, height, None);
        }
        if let Some(weight) = subject.weight_kg {
            push(Indicator::WeightForAge, weight, None);
            if let Some(height) = subject.height_cm {
                push(Indicator::WeightForHeight, weight, Some(height));
            }
        }
        if let Some(muac) = subject.muac_cm {
            let result = check_gender(subject.gender)
                .and_then(|_| categorize_muac(muac, subject.age_months));
            entries.push(AssessmentEntry::from_category(MUAC_FOR_AGE, muac, result));
        }

        Assessment {
            gender: subject.gender,
            age_months: subject.age_months,
            entries,
        }
    }
}
