//! Shared file-writing helpers for JSON artifacts.

use crate::error::{CoreError, Result};
use serde::Serialize;
use std::path::Path;

/// Creates the parent directory of `path` if it does not exist yet.
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| CoreError::io(parent, e))?;
        }
    }
    Ok(())
}

/// Writes `value` as indented JSON with a trailing newline, creating
/// parent directories as needed.
pub(crate) fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    std::fs::write(path, text).map_err(|e| CoreError::io(path, e))
}
