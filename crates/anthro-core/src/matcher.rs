//! Reference row matching.
//!
//! Age-keyed tables hold one row per whole month, so the row is found by
//! exact key. Weight-for-height tables are keyed by length/height in cm:
//! an exact key wins, otherwise the first row in table order for which
//! `height - row_key < 0.5` is taken.
//!
//! The tolerance test is one-sided. A row whose key is larger than the
//! subject's height always passes it, so on an ascending table the first
//! passing row is the lowest key above `height - 0.5`.

use anthro_model::{AnthroError, Gender, Indicator, ReferenceProvider, ReferenceRow, Result};
use tracing::trace;

/// Tolerance (cm) for matching a height to a length/height-keyed row.
pub const HEIGHT_TOLERANCE_CM: f64 = 0.5;

/// Pick the row for `indicator` from `rows`, in table order.
///
/// `height_cm` is only read for indicators that require height.
pub fn match_row(
    rows: &[ReferenceRow],
    indicator: Indicator,
    age_months: i64,
    height_cm: Option<f64>,
) -> Option<&ReferenceRow> {
    if indicator.is_age_keyed() {
        let key = age_months as f64;
        return rows.iter().find(|row| row.key == key);
    }
    let height_cm = height_cm?;
    rows.iter()
        .find(|row| row.key == height_cm)
        .or_else(|| {
            rows.iter()
                .find(|row| height_cm - row.key < HEIGHT_TOLERANCE_CM)
        })
}

/// Fetch the single reference row for a subject from `provider`.
///
/// # Errors
///
/// - [`AnthroError::MissingHeight`] if the indicator requires height and
///   none was given.
/// - [`AnthroError::EmptyTable`] if the provider has no rows at all for the
///   indicator/gender/age combination.
/// - [`AnthroError::RowNotFound`] if rows exist but none matches.
pub fn lookup<P>(
    provider: &P,
    indicator: Indicator,
    gender: Gender,
    age_months: i64,
    height_cm: Option<f64>,
) -> Result<&ReferenceRow>
where
    P: ReferenceProvider + ?Sized,
{
    if indicator.requires_height() && height_cm.is_none() {
        return Err(AnthroError::MissingHeight { indicator });
    }

    let rows = provider.rows(indicator, gender, age_months);
    if rows.is_empty() {
        return Err(AnthroError::EmptyTable {
            indicator,
            gender,
            age_months,
        });
    }

    let row = match_row(rows, indicator, age_months, height_cm).ok_or_else(|| {
        let key = if indicator.is_age_keyed() {
            age_months as f64
        } else {
            height_cm.unwrap_or_default()
        };
        AnthroError::RowNotFound {
            indicator,
            gender,
            key,
        }
    })?;

    trace!(
        indicator = %indicator,
        gender = %gender,
        age_months,
        row_key = row.key,
        "matched reference row"
    );
    Ok(row)
}
