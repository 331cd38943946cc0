//! Clinical categorizations produced from z-scores and MUAC measurements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Clinical category assigned to a single indicator.
///
/// Variants are grouped by the indicator that produces them; the clinical
/// label is available through [`Category::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Category {
    // Head circumference for age
    SevereMicrocephaly,
    Microcephaly,
    NormalHeadCircumference,
    Macrocephaly,

    // Height for age
    SevereStunting,
    ModerateStunting,
    NormalHeight,
    ExtremeTallness,

    // Weight for age
    SevereUnderweight,
    ModerateUnderweight,
    NormalWeight,
    WeightOutOfRange,

    // Weight for height
    SevereAcuteMalnutrition,
    ModerateAcuteMalnutrition,
    NormalWeightForHeight,
    AtRiskOfOverweight,
    Overweight,
    Obese,

    // MUAC for age
    MuacInsufficientEvidence,
    MuacSevereAcuteMalnutrition,
    MuacModerateAcuteMalnutrition,
    MuacNormal,
}

impl Category {
    /// Clinical label shown to health workers.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::SevereMicrocephaly => "Severe Microcephaly",
            Category::Microcephaly => "Microcephaly",
            Category::NormalHeadCircumference => "Normal",
            Category::Macrocephaly => "Macrocephaly (not related to nutritional status)",
            Category::SevereStunting => "Severe Stunting",
            Category::ModerateStunting => "Moderate Stunting",
            Category::NormalHeight => "Normal",
            Category::ExtremeTallness => "Extreme Tallness (not a nutrition related concern)",
            Category::SevereUnderweight => "Severe Underweight",
            Category::ModerateUnderweight => "Moderate Underweight",
            Category::NormalWeight => "Normal",
            Category::WeightOutOfRange => "Out of Range. See Weight For Length/Height",
            Category::SevereAcuteMalnutrition | Category::MuacSevereAcuteMalnutrition => {
                "Severe Acute Malnutrition (SAM)"
            }
            Category::ModerateAcuteMalnutrition | Category::MuacModerateAcuteMalnutrition => {
                "Moderate Acute Malnutrition (MAM)"
            }
            Category::NormalWeightForHeight => "Normal",
            Category::AtRiskOfOverweight => "At risk for overweight",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
            Category::MuacInsufficientEvidence => {
                "Insufficient evidence to recommend a MUAC cutoff for children under 6 months of age"
            }
            Category::MuacNormal => {
                "Normal (if other indicators indicate overweight/obese, they take precedence)"
            }
        }
    }

    /// Whether the category is the healthy band of its indicator.
    pub const fn is_normal(&self) -> bool {
        matches!(
            self,
            Category::NormalHeadCircumference
                | Category::NormalHeight
                | Category::NormalWeight
                | Category::NormalWeightForHeight
                | Category::MuacNormal
        )
    }

    /// Whether the category warrants clinical follow-up.
    ///
    /// Healthy bands do not, and neither do the two deferring categories:
    /// MUAC under six months and weight-for-age above +1 (which is read
    /// from weight-for-height instead).
    pub const fn needs_attention(&self) -> bool {
        !self.is_normal()
            && !matches!(
                self,
                Category::MuacInsufficientEvidence | Category::WeightOutOfRange
            )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
