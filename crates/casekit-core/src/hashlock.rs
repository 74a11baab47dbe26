//! Deterministic hash manifest over evidence artifacts.
//!
//! Re-running against unchanged files reproduces byte-identical
//! output: entries are sorted by path and digests depend only on file
//! content.

use crate::config::Workspace;
use crate::digest::sha256_file;
use crate::error::Result;
use crate::fsio::write_pretty_json;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// One regular file under the input directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the repository root.
    pub path: String,
    /// Lowercase hex SHA-256 of the file content.
    pub sha256: String,
}

/// The manifest document, sole artifact of `hashlock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashManifest {
    pub entries: Vec<FileEntry>,
}

/// Walks `input_dir` under the workspace root and digests every
/// regular file found, transitively. Entries come back sorted by
/// relative path ascending.
pub fn build_manifest(ws: &Workspace, input_dir: &str) -> Result<HashManifest> {
    let dir = ws.resolve(input_dir);

    let mut paths = Vec::new();
    for entry in WalkDir::new(&dir) {
        let entry = entry?;
        if entry.file_type().is_file() {
            paths.push(entry.into_path());
        }
    }

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let rel = path
            .strip_prefix(ws.root())
            .unwrap_or(&path)
            .to_string_lossy()
            .into_owned();
        let sha256 = sha256_file(&path)?;
        tracing::debug!(path = %rel, %sha256, "hashed");
        entries.push(FileEntry { path: rel, sha256 });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(HashManifest { entries })
}

/// Writes the manifest as indented JSON, creating parent directories.
pub fn write_manifest(manifest: &HashManifest, output: &Path) -> Result<()> {
    write_pretty_json(output, manifest)
}
