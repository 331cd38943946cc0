//! Reference rows and the provider interface the scoring engine reads from.

use serde::{Deserialize, Serialize};

use crate::enums::{Gender, Indicator};

/// Columns that are a median, a standard deviation or a coefficient of
/// variation, and so must be strictly positive.
pub const POSITIVE_COLUMNS: [&str; 3] = ["M", "S", "SD"];

/// Whether `column` must hold a strictly positive value.
pub fn is_positive_column(column: &str) -> bool {
    POSITIVE_COLUMNS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(column))
}

/// One bucket of a WHO reference table.
///
/// `key` is the age in months for age-keyed tables, or the length/height
/// in cm for weight-for-height tables. Columns keep the order of the source
/// table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub key: f64,
    pub columns: Vec<(String, f64)>,
}

impl ReferenceRow {
    pub fn new(key: f64) -> Self {
        Self {
            key,
            columns: Vec::new(),
        }
    }

    /// Append a named column value.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: f64) -> Self {
        self.columns.push((column.into(), value));
        self
    }

    /// Look up a column by name (case-insensitive).
    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| *value)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

/// Source of WHO reference rows.
///
/// Implementations are loaded once and read concurrently afterwards, so the
/// trait only hands out shared borrows.
pub trait ReferenceProvider {
    /// Rows of the table that applies to `indicator` and `gender` at
    /// `age_months`, in table order.
    ///
    /// Returns an empty slice when no table is loaded for the combination.
    /// Age matters for weight-for-height, where the WHO publishes a length
    /// table (0-24 months) and a height table (24-60 months).
    fn rows(&self, indicator: Indicator, gender: Gender, age_months: i64) -> &[ReferenceRow];
}

impl<P: ReferenceProvider + ?Sized> ReferenceProvider for std::sync::Arc<P> {
    fn rows(&self, indicator: Indicator, gender: Gender, age_months: i64) -> &[ReferenceRow] {
        (**self).rows(indicator, gender, age_months)
    }
}

impl<P: ReferenceProvider + ?Sized> ReferenceProvider for &P {
    fn rows(&self, indicator: Indicator, gender: Gender, age_months: i64) -> &[ReferenceRow] {
        (**self).rows(indicator, gender, age_months)
    }
}
