//! Release evidence tarball plus inclusion manifest.
//!
//! Packing tolerates absence: include paths that do not exist as
//! regular files are skipped, never fatal. The side-car manifest
//! records what actually made it in.

use crate::config::Workspace;
use crate::error::{CoreError, Result};
use crate::fsio::{ensure_parent, write_pretty_json};
use flate2::{Compression, GzBuilder};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tar::Builder;

/// Side-car manifest written next to the archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackManifest {
    /// Archive path exactly as given by the caller.
    pub package: String,
    /// Relative paths actually bundled, in include-list order.
    pub included: Vec<String>,
}

/// Builds a gzip-compressed tar archive at `output_rel` (resolved
/// against the workspace root) containing every include path that
/// exists as a regular file, stored under its original relative path.
pub fn build_pack(ws: &Workspace, include: &[String], output_rel: &str) -> Result<PackManifest> {
    let out_path = ws.resolve(output_rel);
    ensure_parent(&out_path)?;
    let file = File::create(&out_path).map_err(|e| CoreError::io(&out_path, e))?;

    let encoder = GzBuilder::new()
        .mtime(0)
        .operating_system(255)
        .write(file, Compression::best());
    let mut tar = Builder::new(encoder);
    tar.mode(tar::HeaderMode::Deterministic);

    let mut included = Vec::new();
    for rel in include {
        let src = ws.resolve(rel);
        if !src.is_file() {
            tracing::debug!(path = %src.display(), "include path absent, skipping");
            continue;
        }
        tar.append_path_with_name(&src, rel)
            .map_err(|e| CoreError::io(&src, e))?;
        included.push(rel.clone());
    }

    let encoder = tar
        .into_inner()
        .map_err(|e| CoreError::io(&out_path, e))?;
    encoder
        .finish()
        .map_err(|e| CoreError::io(&out_path, e))?;

    Ok(PackManifest {
        package: output_rel.to_string(),
        included,
    })
}

/// Writes the side-car manifest as indented JSON.
pub fn write_pack_manifest(manifest: &PackManifest, path: &Path) -> Result<()> {
    write_pretty_json(path, manifest)
}
