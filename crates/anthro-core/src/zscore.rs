//! Z-score computation.
//!
//! Head circumference and length/height for age are normally distributed
//! and scored as `(value - M) / SD`. Weight for age and weight for height
//! are skewed and scored with the LMS (Box-Cox) transform
//! `((value / M)^L - 1) / (L * S)`.

use anthro_model::{
    AnthroError, Indicator, Measurement, ReferenceProvider, ReferenceRow, Result, ScoreFamily,
    is_positive_column,
};
use tracing::debug;

use crate::matcher::lookup;
use crate::validator::check_measurement_inputs;

/// Round a z-score to one decimal place, halves away from zero.
///
/// Categorization thresholds are applied to the rounded value. Scores that
/// round to zero from below come back as `0.0`, not `-0.0`.
pub fn round_to_tenth(z: f64) -> f64 {
    (z * 10.0).round() / 10.0 + 0.0
}

fn column(row: &ReferenceRow, indicator: Indicator, name: &str) -> Result<f64> {
    let value = row.get(name).ok_or_else(|| AnthroError::MissingField {
        indicator,
        key: row.key,
        column: name.to_string(),
    })?;
    if !value.is_finite() || (is_positive_column(name) && value <= 0.0) {
        return Err(AnthroError::InvalidReferenceRow {
            indicator,
            key: row.key,
            column: name.to_string(),
        });
    }
    Ok(value)
}

/// Unrounded z-score of `value` against a matched reference row.
///
/// # Errors
///
/// - [`AnthroError::MissingField`] if the row lacks a formula column.
/// - [`AnthroError::InvalidReferenceRow`] if `M`, `S` or `SD` is not
///   strictly positive, or the parameters yield a non-finite score.
pub fn raw_z_score(value: f64, indicator: Indicator, row: &ReferenceRow) -> Result<f64> {
    let z = match indicator.family() {
        ScoreFamily::Normal => {
            let m = column(row, indicator, "M")?;
            let sd = column(row, indicator, "SD")?;
            (value - m) / sd
        }
        ScoreFamily::Lms => {
            let l = column(row, indicator, "L")?;
            let m = column(row, indicator, "M")?;
            let s = column(row, indicator, "S")?;
            lms_z_score(value, l, m, s)
        }
    };
    if !z.is_finite() {
        return Err(AnthroError::InvalidReferenceRow {
            indicator,
            key: row.key,
            column: indicator.family().columns().join("/"),
        });
    }
    Ok(z)
}

/// LMS z-score. At `L == 0` the Box-Cox transform is its logarithmic limit.
pub fn lms_z_score(value: f64, l: f64, m: f64, s: f64) -> f64 {
    if l == 0.0 {
        (value / m).ln() / s
    } else {
        ((value / m).powf(l) - 1.0) / (l * s)
    }
}

/// Validate `measurement`, match its reference row, and return the rounded
/// z-score.
///
/// Inputs are validated again here even if the caller already checked them.
pub fn z_score<P>(provider: &P, measurement: &Measurement) -> Result<f64>
where
    P: ReferenceProvider + ?Sized,
{
    check_measurement_inputs(measurement)?;
    let row = lookup(
        provider,
        measurement.indicator,
        measurement.gender,
        measurement.age_months,
        measurement.height_cm,
    )?;
    let z = round_to_tenth(raw_z_score(measurement.value, measurement.indicator, row)?);
    debug!(
        indicator = %measurement.indicator,
        age_months = measurement.age_months,
        row_key = row.key,
        "computed z-score"
    );
    Ok(z)
}
