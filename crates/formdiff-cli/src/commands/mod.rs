pub mod defaults;
pub mod diff;
pub mod digest;

use formdiff_core::errors::{ExError, FormDiffError};
use formdiff_core::DefaultsTable;
use std::path::Path;

/// Read a whole file, tagging failures with the calling operation
pub(crate) fn read_file(path: &Path, op: &str) -> Result<Vec<u8>, ExError> {
    std::fs::read(path).map_err(|e| {
        ExError::from(FormDiffError::from(e))
            .with_op(op)
            .with_path(path.display().to_string())
    })
}

/// The built-in table, overlaid with `overrides` when given
pub(crate) fn load_table(overrides: Option<&Path>, op: &str) -> Result<DefaultsTable, ExError> {
    match overrides {
        Some(path) => {
            let bytes = read_file(path, op)?;
            DefaultsTable::builtin_with_overrides(&bytes).map_err(|e| {
                ExError::from(e)
                    .with_op(op)
                    .with_path(path.display().to_string())
            })
        }
        None => Ok(DefaultsTable::builtin()),
    }
}
