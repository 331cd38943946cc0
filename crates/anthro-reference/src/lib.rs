//! WHO child growth reference tables.
//!
//! This crate loads the WHO Child Growth Standards tables from disk and
//! serves them to the scoring engine through
//! [`anthro_model::ReferenceProvider`].
//!
//! # Reference Directory Structure
//!
//! ```text
//! reference/
//! ├── hcfa_girls.txt    # Head circumference for age (Month, L, M, S, SD)
//! ├── hcfa_boys.txt
//! ├── lhfa_girls.txt    # Length/height for age (Month, L, M, S, SD)
//! ├── lhfa_boys.txt
//! ├── wfa_girls.txt     # Weight for age (Month, L, M, S)
//! ├── wfa_boys.txt
//! ├── wfl_girls.txt     # Weight for length, 0-24 months (Length, L, M, S)
//! ├── wfl_boys.txt
//! ├── wfh_girls.txt     # Weight for height, 24-60 months (Height, L, M, S)
//! └── wfh_boys.txt
//! ```
//!
//! `.txt` files are tab-separated as downloaded from the WHO; `.csv` files
//! are comma-separated.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use anthro_reference::{ReferenceRegistry, reference_root};
//!
//! let registry = Arc::new(ReferenceRegistry::load_dir(&reference_root())?);
//! ```

pub mod error;
pub mod loader;
pub mod paths;
pub mod registry;
pub mod table;

pub use error::{ReferenceError, Result};
pub use loader::{load_table, load_table_from_str};
pub use paths::{REFERENCE_ENV_VAR, reference_root, resolve_reference_dir};
pub use registry::{ReferenceRegistry, RegistrySummary, TableSummary};
pub use table::{LENGTH_TABLE_MAX_AGE_MONTHS, ReferenceTable, TableKind, identify_file};
