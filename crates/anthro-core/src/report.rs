//! Per-child assessment report.

use anthro_model::{AnthroError, Category, Result};
use serde::Serialize;

use crate::assessor::Score;

/// Result of screening one indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Categorized {
        /// Absent for MUAC, which is categorized from the raw value.
        z_score: Option<f64>,
        category: Category,
        label: &'static str,
    },
    Failed {
        #[serde(skip)]
        error: AnthroError,
        code: &'static str,
        message: String,
    },
}

impl Outcome {
    fn categorized(z_score: Option<f64>, category: Category) -> Self {
        Outcome::Categorized {
            z_score,
            category,
            label: category.label(),
        }
    }

    fn failed(error: AnthroError) -> Self {
        Outcome::Failed {
            code: error.code(),
            message: error.to_string(),
            error,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Outcome::Categorized { category, .. } => Some(*category),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&AnthroError> {
        match self {
            Outcome::Categorized { .. } => None,
            Outcome::Failed { error, .. } => Some(error),
        }
    }
}

/// One screened indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentEntry {
    /// Indicator name, or `MuacForAge`.
    pub indicator: &'static str,
    pub value: f64,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl AssessmentEntry {
    pub(crate) fn from_score(indicator: &'static str, value: f64, result: Result<Score>) -> Self {
        let outcome = match result {
            Ok(score) => Outcome::categorized(Some(score.z_score), score.category),
            Err(error) => Outcome::failed(error),
        };
        Self {
            indicator,
            value,
            outcome,
        }
    }

    pub(crate) fn from_category(
        indicator: &'static str,
        value: f64,
        result: Result<Category>,
    ) -> Self {
        let outcome = match result {
            Ok(category) => Outcome::categorized(None, category),
            Err(error) => Outcome::failed(error),
        };
        Self {
            indicator,
            value,
            outcome,
        }
    }
}

/// Screening results for one child at one visit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub gender: i64,
    pub age_months: i64,
    pub entries: Vec<AssessmentEntry>,
}

impl Assessment {
    pub fn entry(&self, indicator: &str) -> Option<&AssessmentEntry> {
        self.entries
            .iter()
            .find(|entry| entry.indicator == indicator)
    }

    pub fn failure_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.error().is_some())
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Entries whose category calls for clinical follow-up.
    pub fn flagged(&self) -> impl Iterator<Item = &AssessmentEntry> {
        self.entries.iter().filter(|entry| {
            entry
                .outcome
                .category()
                .is_some_and(|category| category.needs_attention())
        })
    }
}
