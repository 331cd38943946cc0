use serde::{Deserialize, Serialize};

use crate::enums::{Gender, Indicator};

/// A single raw measurement to be scored against one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub indicator: Indicator,
    /// Raw value in the indicator's unit (cm or kg).
    pub value: f64,
    pub gender: Gender,
    pub age_months: i64,
    /// Only read by indicators that require height.
    pub height_cm: Option<f64>,
}

impl Measurement {
    pub fn new(indicator: Indicator, value: f64, gender: Gender, age_months: i64) -> Self {
        Self {
            indicator,
            value,
            gender,
            age_months,
            height_cm: None,
        }
    }

    #[must_use]
    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = Some(height_cm);
        self
    }
}

/// Everything known about one child at one visit.
///
/// `gender` stays a raw code so that invalid codes coming from upstream
/// systems are reported rather than rejected at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub gender: i64,
    pub age_months: i64,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub head_circumference_cm: Option<f64>,
    #[serde(default)]
    pub muac_cm: Option<f64>,
}
