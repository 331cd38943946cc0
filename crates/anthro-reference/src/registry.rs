//! Reference registry.
//!
//! Holds every loaded WHO table, indexed by table and gender. The registry
//! is built once and never mutated afterwards; share it behind an `Arc`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anthro_model::{Gender, Indicator, ReferenceProvider, ReferenceRow};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ReferenceError, Result};
use crate::loader::load_table;
use crate::table::{ReferenceTable, TableKind, identify_file};

/// Per-table counts, for display and diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub table: TableKind,
    pub gender: Gender,
    pub source: String,
    pub rows: usize,
    pub first_key: Option<f64>,
    pub last_key: Option<f64>,
}

/// What a registry holds.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySummary {
    pub reference_dir: Option<PathBuf>,
    pub tables: Vec<TableSummary>,
    /// Table/gender combinations with nothing loaded.
    pub missing: Vec<(TableKind, Gender)>,
}

impl RegistrySummary {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Immutable index of loaded reference tables.
#[derive(Debug, Clone, Default)]
pub struct ReferenceRegistry {
    reference_dir: Option<PathBuf>,
    tables: BTreeMap<(TableKind, Gender), ReferenceTable>,
}

impl ReferenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every recognised table file in `dir`.
    ///
    /// Files whose names do not identify a table (see
    /// [`identify_file`]) are skipped. Loading fails if the directory holds
    /// no tables at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read, a table fails to
    /// parse, or two files provide the same table.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|e| ReferenceError::io(dir, e))?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ReferenceError::io(dir, e))?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        // Directory order is platform dependent
        paths.sort();

        let mut registry = Self {
            reference_dir: Some(dir.to_path_buf()),
            tables: BTreeMap::new(),
        };
        for path in paths {
            let Some((kind, gender)) = identify_file(&path) else {
                debug!(path = %path.display(), "skipping non-table file");
                continue;
            };
            registry.insert(load_table(&path, kind, gender)?)?;
        }

        if registry.tables.is_empty() {
            return Err(ReferenceError::NoTables {
                path: dir.to_path_buf(),
            });
        }
        info!(
            dir = %dir.display(),
            tables = registry.tables.len(),
            "loaded reference tables"
        );
        Ok(registry)
    }

    /// Add a table. Each table/gender combination may be loaded once.
    pub fn insert(&mut self, table: ReferenceTable) -> Result<()> {
        let key = (table.kind, table.gender);
        if self.tables.contains_key(&key) {
            return Err(ReferenceError::DuplicateTable {
                kind: table.kind,
                gender: table.gender,
                source_name: table.source,
            });
        }
        self.tables.insert(key, table);
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_table(mut self, table: ReferenceTable) -> Result<Self> {
        self.insert(table)?;
        Ok(self)
    }

    pub fn table(&self, kind: TableKind, gender: Gender) -> Option<&ReferenceTable> {
        self.tables.get(&(kind, gender))
    }

    pub fn tables(&self) -> impl Iterator<Item = &ReferenceTable> {
        self.tables.values()
    }

    pub fn reference_dir(&self) -> Option<&Path> {
        self.reference_dir.as_deref()
    }

    pub fn summary(&self) -> RegistrySummary {
        let tables = self
            .tables
            .values()
            .map(|table| {
                let range = table.key_range();
                TableSummary {
                    table: table.kind,
                    gender: table.gender,
                    source: table.source.clone(),
                    rows: table.len(),
                    first_key: range.map(|(first, _)| first),
                    last_key: range.map(|(_, last)| last),
                }
            })
            .collect();
        let missing = TableKind::all()
            .iter()
            .flat_map(|kind| Gender::all().iter().map(move |gender| (*kind, *gender)))
            .filter(|key| !self.tables.contains_key(key))
            .collect();
        RegistrySummary {
            reference_dir: self.reference_dir.clone(),
            tables,
            missing,
        }
    }
}

impl ReferenceProvider for ReferenceRegistry {
    fn rows(&self, indicator: Indicator, gender: Gender, age_months: i64) -> &[ReferenceRow] {
        let kind = TableKind::for_lookup(indicator, age_months);
        self.table(kind, gender)
            .map(|table| table.rows.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(kind: TableKind, gender: Gender, keys: &[f64]) -> ReferenceTable {
        ReferenceTable {
            kind,
            gender,
            source: format!("{kind}_{}", gender.table_suffix()),
            rows: keys
                .iter()
                .map(|key| ReferenceRow::new(*key).with("M", 1.0))
                .collect(),
        }
    }

    #[test]
    fn rows_route_weight_for_height_by_age() {
        let registry = ReferenceRegistry::new()
            .with_table(table(TableKind::Wfl, Gender::Female, &[45.0, 45.5]))
            .and_then(|r| r.with_table(table(TableKind::Wfh, Gender::Female, &[65.0])))
            .expect("build registry");

        let under_two = registry.rows(Indicator::WeightForHeight, Gender::Female, 24);
        assert_eq!(under_two.len(), 2);
        let over_two = registry.rows(Indicator::WeightForHeight, Gender::Female, 25);
        assert_eq!(over_two.len(), 1);
        assert_eq!(over_two[0].key, 65.0);
    }

    #[test]
    fn missing_table_yields_no_rows() {
        let registry = ReferenceRegistry::new();
        assert!(
            registry
                .rows(Indicator::WeightForAge, Gender::Male, 3)
                .is_empty()
        );
        assert_eq!(registry.summary().missing.len(), 10);
    }

    #[test]
    fn duplicate_tables_are_rejected() {
        let mut registry = ReferenceRegistry::new();
        registry
            .insert(table(TableKind::Wfa, Gender::Male, &[0.0]))
            .expect("first insert");
        let err = registry
            .insert(table(TableKind::Wfa, Gender::Male, &[0.0]))
            .unwrap_err();
        assert!(matches!(err, ReferenceError::DuplicateTable { .. }));
    }
}
