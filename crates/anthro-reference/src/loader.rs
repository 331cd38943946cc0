//! Reference table loading.
//!
//! Tables are read from the files the WHO publishes: tab-separated `.txt`
//! downloads, or comma-separated `.csv` exports of the same content. The
//! first column is the row key (`Month`, `Length`, or `Height`); every other
//! column is kept by name.

use std::io::Cursor;
use std::path::Path;

use anthro_model::{Gender, ReferenceRow, is_positive_column};
use tracing::debug;

use crate::error::{ReferenceError, Result};
use crate::table::{ReferenceTable, TableKind};

/// Field delimiter for a reference file, chosen by extension.
pub fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("txt") || ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

/// Load a single reference table from a file on disk.
pub fn load_table(path: &Path, kind: TableKind, gender: Gender) -> Result<ReferenceTable> {
    let content = std::fs::read_to_string(path).map_err(|e| ReferenceError::io(path, e))?;
    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    load_table_from_str(&content, &source, delimiter_for(path), kind, gender)
}

/// Load a single reference table from delimited string content.
///
/// # Validation
///
/// - The columns the indicator's formula needs (`M`/`SD` or `L`/`M`/`S`)
///   must be present in the header.
/// - Every cell must parse as a finite number.
/// - `M`, `S` and `SD` cells must be strictly positive.
/// - Keys must be strictly ascending, so that "first row in table order"
///   is well defined for the row matcher.
pub fn load_table_from_str(
    content: &str,
    source: &str,
    delimiter: u8,
    kind: TableKind,
    gender: Gender,
) -> Result<ReferenceTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(content.as_bytes()));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ReferenceError::CsvParse {
            file: source.to_string(),
            message: e.to_string(),
        })?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() || headers[0].is_empty() {
        return Err(ReferenceError::MissingColumn {
            file: source.to_string(),
            column: "key".to_string(),
        });
    }
    for required in kind.indicator().family().columns() {
        if !headers.iter().any(|h| h.eq_ignore_ascii_case(required)) {
            return Err(ReferenceError::MissingColumn {
                file: source.to_string(),
                column: (*required).to_string(),
            });
        }
    }

    let mut rows: Vec<ReferenceRow> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ReferenceError::CsvParse {
            file: source.to_string(),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, csv::Position::line);

        // Skip blank trailing lines some exports carry
        if record.iter().all(str::is_empty) {
            continue;
        }

        let parse = |index: usize| -> Result<f64> {
            let raw = record.get(index).unwrap_or_default();
            raw.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ReferenceError::InvalidNumber {
                    file: source.to_string(),
                    line,
                    column: headers[index].clone(),
                    value: raw.to_string(),
                })
        };

        let key = parse(0)?;
        if let Some(previous) = rows.last().map(|row| row.key)
            && key <= previous
        {
            return Err(ReferenceError::UnsortedTable {
                file: source.to_string(),
                line,
                key,
                previous,
            });
        }

        let mut row = ReferenceRow::new(key);
        for (index, name) in headers.iter().enumerate().skip(1) {
            let value = parse(index)?;
            if is_positive_column(name) && value <= 0.0 {
                return Err(ReferenceError::NonPositiveParameter {
                    file: source.to_string(),
                    line,
                    column: name.clone(),
                    value,
                });
            }
            row = row.with(name.clone(), value);
        }
        rows.push(row);
    }

    debug!(
        table = %kind,
        gender = %gender,
        source,
        rows = rows.len(),
        "loaded reference table"
    );

    Ok(ReferenceTable {
        kind,
        gender,
        source: source.to_string(),
        rows,
    })
}
