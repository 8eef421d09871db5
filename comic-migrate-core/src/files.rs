//! Catalog file I/O: load, backup, and atomic write.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::MigrateError;

/// Suffix appended to the input path for the pre-migration copy.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Read and parse a catalog document.
pub fn load_catalog(path: &Path) -> Result<Value, MigrateError> {
    if !path.exists() {
        return Err(MigrateError::InputNotFound(path.display().to_string()));
    }
    let contents = fs::read_to_string(path).map_err(|e| MigrateError::io(path.display(), e))?;
    serde_json::from_str(&contents).map_err(|e| MigrateError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

/// `<input>.backup`, next to the input.
pub fn backup_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copy `input` byte-for-byte to its backup path.
///
/// Returns `None` without writing anything when `input` does not exist.
pub fn create_backup(input: &Path) -> Result<Option<PathBuf>, MigrateError> {
    if !input.exists() {
        return Ok(None);
    }
    let backup = backup_path(input);
    fs::copy(input, &backup).map_err(|e| MigrateError::io(backup.display(), e))?;
    Ok(Some(backup))
}

/// Pretty-print a catalog: two-space indent, non-ASCII kept as-is.
pub fn render_catalog(document: &Value) -> Result<String, MigrateError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write a catalog to `path` via a sibling temp file and rename.
///
/// The parent directory must already exist. On failure the temp file is
/// removed and `path` is left as it was.
pub fn write_catalog(path: &Path, document: &Value) -> Result<(), MigrateError> {
    let rendered = render_catalog(document)?;

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    fs::write(&tmp, rendered).map_err(|e| MigrateError::io(tmp.display(), e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(MigrateError::io(path.display(), e));
    }
    log::debug!("Wrote {}", path.display());
    Ok(())
}
