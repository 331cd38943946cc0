//! Type-safe enumerations for anthropometric concepts.
//!
//! Reference tables and upstream systems encode these as integers or free
//! text; parsing them here is where invalid values are rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnthroError;

/// Sex of the subject, as used by the WHO reference tables.
///
/// Raw codes follow the WHO data exchange convention: 1 is female, 2 is male.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const FEMALE_CODE: i64 = 1;
    pub const MALE_CODE: i64 = 2;

    /// Resolve a raw gender code.
    pub fn from_code(code: i64) -> Result<Self, AnthroError> {
        match code {
            Self::FEMALE_CODE => Ok(Gender::Female),
            Self::MALE_CODE => Ok(Gender::Male),
            _ => Err(AnthroError::InvalidGender {
                code: code.to_string(),
            }),
        }
    }

    pub const fn code(&self) -> i64 {
        match self {
            Gender::Female => Self::FEMALE_CODE,
            Gender::Male => Self::MALE_CODE,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }

    /// Suffix the WHO uses in table file names (`wfa_girls`, `wfa_boys`).
    pub const fn table_suffix(&self) -> &'static str {
        match self {
            Gender::Female => "girls",
            Gender::Male => "boys",
        }
    }

    pub const fn all() -> &'static [Gender] {
        &[Gender::Female, Gender::Male]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AnthroError;

    /// Accepts the raw codes plus common spellings (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "1" | "f" | "female" | "girl" | "girls" => Ok(Gender::Female),
            "2" | "m" | "male" | "boy" | "boys" => Ok(Gender::Male),
            _ => Err(AnthroError::InvalidGender {
                code: s.to_string(),
            }),
        }
    }
}

/// Statistical formula used to turn a measurement into a z-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreFamily {
    /// Normally distributed: `(value - M) / SD`.
    Normal,
    /// Box-Cox LMS: `((value / M)^L - 1) / (L * S)`.
    Lms,
}

impl ScoreFamily {
    /// Reference columns the formula reads.
    pub const fn columns(&self) -> &'static [&'static str] {
        match self {
            ScoreFamily::Normal => &["M", "SD"],
            ScoreFamily::Lms => &["L", "M", "S"],
        }
    }
}

/// WHO anthropometric growth indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    HeadCircumferenceForAge,
    HeightForAge,
    WeightForAge,
    WeightForHeight,
}

impl Indicator {
    /// Canonical name, as used in reports and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Indicator::HeadCircumferenceForAge => "HeadCircumferenceForAge",
            Indicator::HeightForAge => "HeightForAge",
            Indicator::WeightForAge => "WeightForAge",
            Indicator::WeightForHeight => "WeightForHeight",
        }
    }

    /// Short WHO abbreviation.
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Indicator::HeadCircumferenceForAge => "HCFA",
            Indicator::HeightForAge => "HFA",
            Indicator::WeightForAge => "WFA",
            Indicator::WeightForHeight => "WFH",
        }
    }

    pub const fn family(&self) -> ScoreFamily {
        match self {
            Indicator::HeadCircumferenceForAge | Indicator::HeightForAge => ScoreFamily::Normal,
            Indicator::WeightForAge | Indicator::WeightForHeight => ScoreFamily::Lms,
        }
    }

    /// Whether the subject's height participates in row matching.
    ///
    /// Age-keyed indicators never look at height, so they neither need nor
    /// validate one.
    pub const fn requires_height(&self) -> bool {
        matches!(self, Indicator::WeightForHeight)
    }

    /// Whether reference rows are keyed by age in months (as opposed to
    /// length/height in cm).
    pub const fn is_age_keyed(&self) -> bool {
        !self.requires_height()
    }

    /// Unit of the raw measurement.
    pub const fn unit(&self) -> &'static str {
        match self {
            Indicator::HeadCircumferenceForAge | Indicator::HeightForAge => "cm",
            Indicator::WeightForAge | Indicator::WeightForHeight => "kg",
        }
    }

    pub const fn all() -> &'static [Indicator] {
        &[
            Indicator::HeadCircumferenceForAge,
            Indicator::HeightForAge,
            Indicator::WeightForAge,
            Indicator::WeightForHeight,
        ]
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Indicator {
    type Err = AnthroError;

    /// Parse either the canonical name or the abbreviation (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "HEADCIRCUMFERENCEFORAGE" | "HCFA" => Ok(Indicator::HeadCircumferenceForAge),
            "HEIGHTFORAGE" | "LENGTHFORAGE" | "HFA" | "LHFA" => Ok(Indicator::HeightForAge),
            "WEIGHTFORAGE" | "WFA" => Ok(Indicator::WeightForAge),
            "WEIGHTFORHEIGHT" | "WEIGHTFORLENGTH" | "WFH" | "WFL" => {
                Ok(Indicator::WeightForHeight)
            }
            _ => Err(AnthroError::InvalidIndicator {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_code() {
        assert_eq!(Gender::from_code(1).unwrap(), Gender::Female);
        assert_eq!(Gender::from_code(2).unwrap(), Gender::Male);
        assert!(matches!(
            Gender::from_code(0),
            Err(AnthroError::InvalidGender { .. })
        ));
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("Girl".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" M ".parse::<Gender>().unwrap(), Gender::Male);
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn test_indicator_from_str() {
        assert_eq!(
            "WeightForHeight".parse::<Indicator>().unwrap(),
            Indicator::WeightForHeight
        );
        assert_eq!("hcfa".parse::<Indicator>().unwrap(), Indicator::HeadCircumferenceForAge);
        assert_eq!(
            "length-for-age".parse::<Indicator>().unwrap(),
            Indicator::HeightForAge
        );
        assert!(matches!(
            "BMIForAge".parse::<Indicator>(),
            Err(AnthroError::InvalidIndicator { .. })
        ));
    }

    #[test]
    fn test_indicator_families() {
        assert_eq!(Indicator::HeightForAge.family(), ScoreFamily::Normal);
        assert_eq!(Indicator::WeightForHeight.family(), ScoreFamily::Lms);
        assert!(Indicator::WeightForHeight.requires_height());
        assert!(!Indicator::WeightForAge.requires_height());
    }
}
