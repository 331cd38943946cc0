//! Input gates that make the score formulas well-defined.
//!
//! Each check is independent and fails with the matching [`AnthroError`]
//! variant; callers run them in order and stop at the first failure.

use anthro_model::{AnthroError, Gender, Indicator, Measurement, Result};

pub const MIN_AGE_MONTHS: i64 = 0;
pub const MAX_AGE_MONTHS: i64 = 60;

/// Oldest age measured lying down; the WHO length range applies up to here.
pub const RECUMBENT_MAX_AGE_MONTHS: i64 = 24;

/// Valid length range (cm) for ages up to 24 months.
pub const LENGTH_RANGE_CM: (f64, f64) = (45.0, 110.0);

/// Valid standing height range (cm) for ages 24 (exclusive) to 60 months.
pub const HEIGHT_RANGE_CM: (f64, f64) = (65.0, 120.0);

pub fn check_gender(code: i64) -> Result<Gender> {
    Gender::from_code(code)
}

pub fn check_age_months(age_months: i64) -> Result<()> {
    if (MIN_AGE_MONTHS..=MAX_AGE_MONTHS).contains(&age_months) {
        Ok(())
    } else {
        Err(AnthroError::InvalidAge { age_months })
    }
}

/// Height bounds that apply at `age_months`.
pub const fn height_bounds(age_months: i64) -> (f64, f64) {
    if age_months <= RECUMBENT_MAX_AGE_MONTHS {
        LENGTH_RANGE_CM
    } else {
        HEIGHT_RANGE_CM
    }
}

pub fn check_height(height_cm: f64, age_months: i64) -> Result<()> {
    let (min_cm, max_cm) = height_bounds(age_months);
    if (min_cm..=max_cm).contains(&height_cm) {
        Ok(())
    } else {
        Err(AnthroError::InvalidHeight {
            height_cm,
            age_months,
            min_cm,
            max_cm,
        })
    }
}

pub fn check_indicator(name: &str) -> Result<Indicator> {
    name.parse()
}

/// Raw measurements must be positive and finite; the LMS power transform
/// is undefined otherwise.
pub fn check_measurement(value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnthroError::InvalidMeasurement { value })
    }
}

/// Run every gate that applies to `measurement`.
///
/// The height gate only runs for indicators that require height; for the
/// age-keyed indicators any supplied height is ignored.
pub fn check_measurement_inputs(measurement: &Measurement) -> Result<()> {
    check_age_months(measurement.age_months)?;
    if measurement.indicator.requires_height() {
        let height_cm = measurement
            .height_cm
            .ok_or(AnthroError::MissingHeight {
                indicator: measurement.indicator,
            })?;
        check_height(height_cm, measurement.age_months)?;
    }
    check_measurement(measurement.value)
}
