//! Error types for reference table loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::table::TableKind;
use anthro_model::Gender;

/// Errors raised while loading WHO reference tables.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {message}")]
    CsvParse { file: String, message: String },

    #[error("{file} is missing required column {column}")]
    MissingColumn { file: String, column: String },

    #[error("{file} line {line}: invalid number {value:?} in column {column}")]
    InvalidNumber {
        file: String,
        line: u64,
        column: String,
        value: String,
    },

    #[error("{file} line {line}: column {column} must be positive, got {value}")]
    NonPositiveParameter {
        file: String,
        line: u64,
        column: String,
        value: f64,
    },

    #[error("{file} line {line}: key {key} does not follow {previous} (rows must be strictly ascending)")]
    UnsortedTable {
        file: String,
        line: u64,
        key: f64,
        previous: f64,
    },

    #[error("table {kind} for {gender} loaded twice (second source: {source_name})")]
    DuplicateTable {
        kind: TableKind,
        gender: Gender,
        source_name: String,
    },

    #[error("{file} does not name a known reference table")]
    UnknownTable { file: String },

    #[error("no reference tables found in {path}")]
    NoTables { path: PathBuf },
}

impl ReferenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for reference operations.
pub type Result<T> = std::result::Result<T, ReferenceError>;
