use thiserror::Error;

use crate::enums::{Gender, Indicator};

/// Failures raised while validating, matching, scoring, or categorizing a
/// measurement. Every variant is terminal: the measurement must be reviewed,
/// not retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnthroError {
    #[error("gender must be 1 (female) or 2 (male), got {code}")]
    InvalidGender { code: String },

    #[error("age must be between 0 and 60 months inclusive, got {age_months}")]
    InvalidAge { age_months: i64 },

    #[error(
        "for age {age_months} months, height must be between {min_cm} and {max_cm} cm, got {height_cm}"
    )]
    InvalidHeight {
        height_cm: f64,
        age_months: i64,
        min_cm: f64,
        max_cm: f64,
    },

    #[error("{indicator} requires a height")]
    MissingHeight { indicator: Indicator },

    #[error("unknown anthropometric indicator: {name}")]
    InvalidIndicator { name: String },

    #[error("measurement must be a positive finite number, got {value}")]
    InvalidMeasurement { value: f64 },

    #[error("no reference rows loaded for {indicator} ({gender}, {age_months} months)")]
    EmptyTable {
        indicator: Indicator,
        gender: Gender,
        age_months: i64,
    },

    #[error("no reference row for {indicator} ({gender}) matches key {key}")]
    RowNotFound {
        indicator: Indicator,
        gender: Gender,
        key: f64,
    },

    #[error("reference row {key} for {indicator} has no {column} column")]
    MissingField {
        indicator: Indicator,
        key: f64,
        column: String,
    },

    #[error("reference row {key} for {indicator} has an unusable {column}")]
    InvalidReferenceRow {
        indicator: Indicator,
        key: f64,
        column: String,
    },

    #[error("{subject} value {value} falls between categorization bands")]
    CategorizationGap { subject: String, value: f64 },
}

impl AnthroError {
    /// Stable short code for reports and logs.
    pub fn code(&self) -> &'static str {
        match self {
            AnthroError::InvalidGender { .. } => "invalid_gender",
            AnthroError::InvalidAge { .. } => "invalid_age",
            AnthroError::InvalidHeight { .. } => "invalid_height",
            AnthroError::MissingHeight { .. } => "missing_height",
            AnthroError::InvalidIndicator { .. } => "invalid_indicator",
            AnthroError::InvalidMeasurement { .. } => "invalid_measurement",
            AnthroError::EmptyTable { .. } => "empty_table",
            AnthroError::RowNotFound { .. } => "row_not_found",
            AnthroError::MissingField { .. } => "missing_field",
            AnthroError::InvalidReferenceRow { .. } => "invalid_reference_row",
            AnthroError::CategorizationGap { .. } => "categorization_gap",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnthroError>;
