//! Recorded replay hash reading.

use crate::error::{CoreError, Result};
use std::path::Path;

/// Reads a file expected to hold a single hash value as text,
/// stripped of surrounding whitespace.
pub fn read_hash(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    Ok(text.trim().to_string())
}
