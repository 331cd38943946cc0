//! Clinical categorization bands.
//!
//! Every indicator maps its rounded z-score through an ordered list of
//! contiguous bands. MUAC is categorized from the raw measurement in cm.
//! A value in no band is reported as [`AnthroError::CategorizationGap`],
//! never assigned to a neighbour.

use anthro_model::{AnthroError, Category, Indicator, Result};
use tracing::warn;

use crate::validator::{check_age_months, check_measurement};

/// Subject name used for MUAC in reports and errors.
pub const MUAC_FOR_AGE: &str = "MuacForAge";

/// Children younger than this have no recommended MUAC cutoff.
pub const MUAC_MIN_AGE_MONTHS: i64 = 6;

/// One end of a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Unbounded,
    Inclusive(f64),
    Exclusive(f64),
}

/// A contiguous value range mapped to a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower: Bound,
    pub upper: Bound,
    pub category: Category,
}

impl Band {
    pub const fn new(lower: Bound, upper: Bound, category: Category) -> Self {
        Self {
            lower,
            upper,
            category,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_lower = match self.lower {
            Bound::Unbounded => !value.is_nan(),
            Bound::Inclusive(limit) => value >= limit,
            Bound::Exclusive(limit) => value > limit,
        };
        let below_upper = match self.upper {
            Bound::Unbounded => !value.is_nan(),
            Bound::Inclusive(limit) => value <= limit,
            Bound::Exclusive(limit) => value < limit,
        };
        above_lower && below_upper
    }
}

use Bound::{Exclusive, Inclusive, Unbounded};

const HEAD_CIRCUMFERENCE_BANDS: &[Band] = &[
    Band::new(Unbounded, Exclusive(-3.0), Category::SevereMicrocephaly),
    Band::new(Inclusive(-3.0), Exclusive(-2.0), Category::Microcephaly),
    Band::new(Inclusive(-2.0), Inclusive(3.0), Category::NormalHeadCircumference),
    Band::new(Exclusive(3.0), Unbounded, Category::Macrocephaly),
];

const HEIGHT_BANDS: &[Band] = &[
    Band::new(Unbounded, Exclusive(-3.0), Category::SevereStunting),
    Band::new(Inclusive(-3.0), Exclusive(-2.0), Category::ModerateStunting),
    Band::new(Inclusive(-2.0), Inclusive(3.0), Category::NormalHeight),
    Band::new(Exclusive(3.0), Unbounded, Category::ExtremeTallness),
];

const WEIGHT_BANDS: &[Band] = &[
    Band::new(Unbounded, Exclusive(-3.0), Category::SevereUnderweight),
    Band::new(Inclusive(-3.0), Exclusive(-2.0), Category::ModerateUnderweight),
    Band::new(Inclusive(-2.0), Inclusive(1.0), Category::NormalWeight),
    Band::new(Exclusive(1.0), Unbounded, Category::WeightOutOfRange),
];

const WEIGHT_FOR_HEIGHT_BANDS: &[Band] = &[
    Band::new(Unbounded, Exclusive(-3.0), Category::SevereAcuteMalnutrition),
    Band::new(Inclusive(-3.0), Exclusive(-2.0), Category::ModerateAcuteMalnutrition),
    Band::new(Inclusive(-2.0), Inclusive(1.0), Category::NormalWeightForHeight),
    Band::new(Exclusive(1.0), Inclusive(2.0), Category::AtRiskOfOverweight),
    Band::new(Exclusive(2.0), Inclusive(3.0), Category::Overweight),
    Band::new(Exclusive(3.0), Unbounded, Category::Obese),
];

/// MUAC bands in cm. 12.5 itself belongs to neither MAM nor Normal.
pub const MUAC_BANDS: &[Band] = &[
    Band::new(Unbounded, Exclusive(11.5), Category::MuacSevereAcuteMalnutrition),
    Band::new(Inclusive(11.5), Exclusive(12.5), Category::MuacModerateAcuteMalnutrition),
    Band::new(Exclusive(12.5), Unbounded, Category::MuacNormal),
];

/// Z-score bands for `indicator`, lowest first.
pub const fn bands_for(indicator: Indicator) -> &'static [Band] {
    match indicator {
        Indicator::HeadCircumferenceForAge => HEAD_CIRCUMFERENCE_BANDS,
        Indicator::HeightForAge => HEIGHT_BANDS,
        Indicator::WeightForAge => WEIGHT_BANDS,
        Indicator::WeightForHeight => WEIGHT_FOR_HEIGHT_BANDS,
    }
}

/// First band containing `value`, or a gap error naming `subject`.
pub fn classify(bands: &[Band], subject: &str, value: f64) -> Result<Category> {
    match bands.iter().find(|band| band.contains(value)) {
        Some(band) => Ok(band.category),
        None => {
            warn!(subject, "value falls between categorization bands");
            Err(AnthroError::CategorizationGap {
                subject: subject.to_string(),
                value,
            })
        }
    }
}

/// Categorize a rounded z-score for `indicator`.
pub fn categorize(indicator: Indicator, z_score: f64) -> Result<Category> {
    classify(bands_for(indicator), indicator.as_str(), z_score)
}

/// Categorize a mid-upper arm circumference (cm) for a child of
/// `age_months`.
///
/// Under six months there is no recommended cutoff and the
/// insufficient-evidence category is returned whatever the measurement.
pub fn categorize_muac(muac_cm: f64, age_months: i64) -> Result<Category> {
    check_age_months(age_months)?;
    if age_months < MUAC_MIN_AGE_MONTHS {
        return Ok(Category::MuacInsufficientEvidence);
    }
    check_measurement(muac_cm)?;
    classify(MUAC_BANDS, MUAC_FOR_AGE, muac_cm)
}
