//! WHO child growth z-scores and clinical categorization.
//!
//! The pipeline for one measurement is:
//!
//! 1. [`validator`]: gender, age (0-60 months), height range, measurement.
//! 2. [`matcher`]: pick the reference row by age, or by length/height for
//!    weight-for-height.
//! 3. [`zscore`]: normal or LMS formula, rounded to one decimal.
//! 4. [`categorize`]: map the rounded score onto the indicator's bands.
//!
//! [`GrowthAssessor`] wires these together over an injected
//! [`ReferenceProvider`](anthro_model::ReferenceProvider).
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use anthro_core::GrowthAssessor;
//! use anthro_reference::{ReferenceRegistry, reference_root};
//!
//! let registry = Arc::new(ReferenceRegistry::load_dir(&reference_root())?);
//! let assessor = GrowthAssessor::new(registry);
//! let category = assessor.categorize_weight_for_height(3.0, 1, 50.0, 0)?;
//! println!("{category}");
//! ```

pub mod assessor;
pub mod categorize;
pub mod matcher;
pub mod report;
pub mod validator;
pub mod zscore;

pub use assessor::{GrowthAssessor, Score};
pub use categorize::{MUAC_FOR_AGE, bands_for, categorize, categorize_muac};
pub use matcher::{lookup, match_row};
pub use report::{Assessment, AssessmentEntry, Outcome};
pub use zscore::{round_to_tenth, z_score};
