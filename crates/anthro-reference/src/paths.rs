//! Reference directory path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the reference table directory.
pub const REFERENCE_ENV_VAR: &str = "ANTHRO_REFERENCE_DIR";

/// Get the reference table root directory.
///
/// Resolution order:
/// 1. `ANTHRO_REFERENCE_DIR` environment variable
/// 2. `reference/` directory relative to workspace root
pub fn reference_root() -> PathBuf {
    if let Ok(root) = std::env::var(REFERENCE_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../reference")
}

/// Resolve the directory to load from, preferring an explicit path.
pub fn resolve_reference_dir(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => reference_root(),
    }
}
