pub mod category;
pub mod enums;
pub mod error;
pub mod measurement;
pub mod reference;

pub use category::Category;
pub use enums::{Gender, Indicator, ScoreFamily};
pub use error::{AnthroError, Result};
pub use measurement::{Measurement, Subject};
pub use reference::{POSITIVE_COLUMNS, ReferenceProvider, ReferenceRow, is_positive_column};
