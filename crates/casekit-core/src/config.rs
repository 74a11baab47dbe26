//! Per-invocation workspace configuration.
//!
//! Every tool resolves its paths through a [`Workspace`] constructed
//! once from the `--repo-root` flag. No ambient state.

use std::path::{Path, PathBuf};

/// Default directory hashed by `hashlock`, relative to the root.
pub const DEFAULT_INPUT_DIR: &str = "evidence/manifests";
/// Default `hashlock` manifest output path.
pub const DEFAULT_HASHLOCK_PATH: &str = "evidence/manifests/hashlock.json";
/// Default `releasepack` archive output path.
pub const DEFAULT_PACKAGE_PATH: &str = "evidence/manifests/releasepack.tgz";
/// Default `releasepack` side-car manifest path.
pub const DEFAULT_PACK_MANIFEST_PATH: &str = "evidence/manifests/releasepack.json";
/// Default `tracecheck` report path.
pub const DEFAULT_REPORT_PATH: &str = "evidence/manifests/tracecheck-report.json";
/// Directory holding the three traceability tables, relative to the root.
pub const TRACE_DIR: &str = "safety-case/traceability";

/// Standard evidence set packed when `releasepack` is given no
/// explicit include list.
pub const DEFAULT_INCLUDE: &[&str] = &[
    "evidence/manifests/spec-hash.txt",
    "evidence/manifests/tracecheck-report.json",
    "evidence/manifests/hashlock.json",
];

/// Resolved repository root plus the path conventions hanging off it.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins a path onto the root. Absolute inputs pass through
    /// unchanged, so callers may hand either form to any flag.
    pub fn resolve(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }

    pub fn trace_dir(&self) -> PathBuf {
        self.resolve(TRACE_DIR)
    }
}
