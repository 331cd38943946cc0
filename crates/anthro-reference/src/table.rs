//! WHO reference table identification.

use std::fmt;
use std::path::Path;

use anthro_model::{Gender, Indicator, ReferenceRow};
use serde::Serialize;

/// Oldest age (in months) served by the weight-for-length table.
/// Older children are measured standing and use the weight-for-height table.
pub const LENGTH_TABLE_MAX_AGE_MONTHS: i64 = 24;

/// One of the WHO reference tables, independent of gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TableKind {
    /// Head circumference for age, keyed by month.
    Hcfa,
    /// Length/height for age, keyed by month.
    Lhfa,
    /// Weight for age, keyed by month.
    Wfa,
    /// Weight for length (recumbent, 45-110 cm), for ages up to 24 months.
    Wfl,
    /// Weight for height (standing, 65-120 cm), for ages 24-60 months.
    Wfh,
}

impl TableKind {
    /// File stem prefix the WHO uses for the table.
    pub const fn stem(&self) -> &'static str {
        match self {
            Self::Hcfa => "hcfa",
            Self::Lhfa => "lhfa",
            Self::Wfa => "wfa",
            Self::Wfl => "wfl",
            Self::Wfh => "wfh",
        }
    }

    pub const fn indicator(&self) -> Indicator {
        match self {
            Self::Hcfa => Indicator::HeadCircumferenceForAge,
            Self::Lhfa => Indicator::HeightForAge,
            Self::Wfa => Indicator::WeightForAge,
            Self::Wfl | Self::Wfh => Indicator::WeightForHeight,
        }
    }

    /// Table that serves `indicator` for a child of `age_months`.
    pub const fn for_lookup(indicator: Indicator, age_months: i64) -> Self {
        match indicator {
            Indicator::HeadCircumferenceForAge => Self::Hcfa,
            Indicator::HeightForAge => Self::Lhfa,
            Indicator::WeightForAge => Self::Wfa,
            Indicator::WeightForHeight => {
                if age_months <= LENGTH_TABLE_MAX_AGE_MONTHS {
                    Self::Wfl
                } else {
                    Self::Wfh
                }
            }
        }
    }

    pub const fn all() -> &'static [TableKind] {
        &[Self::Hcfa, Self::Lhfa, Self::Wfa, Self::Wfl, Self::Wfh]
    }

    fn from_stem(stem: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.stem().eq_ignore_ascii_case(stem))
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stem())
    }
}

/// Identify the table and gender a file holds from its name.
///
/// Accepts `<stem>_<girls|boys>` followed by anything WHO appends
/// (e.g. `wfa_girls_0-to-5-years_zscores.txt`).
pub fn identify_file(path: &Path) -> Option<(TableKind, Gender)> {
    let stem = path.file_stem()?.to_str()?;
    let mut parts = stem.split('_');
    let kind = TableKind::from_stem(parts.next()?)?;
    let gender = match parts.next()?.to_ascii_lowercase().as_str() {
        "girls" => Gender::Female,
        "boys" => Gender::Male,
        _ => return None,
    };
    Some((kind, gender))
}

/// A loaded reference table for one gender.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    pub kind: TableKind,
    pub gender: Gender,
    /// Where the rows came from (file name or caller-provided label).
    pub source: String,
    pub rows: Vec<ReferenceRow>,
}

impl ReferenceTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest and largest key, if any rows are loaded.
    pub fn key_range(&self) -> Option<(f64, f64)> {
        let first = self.rows.first()?;
        let last = self.rows.last()?;
        Some((first.key, last.key))
    }
}
