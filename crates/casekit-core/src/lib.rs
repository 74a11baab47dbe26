//! Core logic for the casekit safety-case evidence tools.
//!
//! Four independent operations, composed externally through the files
//! they read and write:
//!
//! - [`hashlock`] — deterministic hash manifest over evidence artifacts
//! - [`releasepack`] — release tarball plus inclusion manifest
//! - [`replay`] — recorded replay hash comparison
//! - [`tracecheck`] — traceability graph consistency report

pub mod config;
pub mod digest;
pub mod error;
mod fsio;
pub mod hashlock;
pub mod releasepack;
pub mod replay;
pub mod table;
pub mod tracecheck;

// Convenience re-exports
pub use config::Workspace;
pub use error::CoreError;
pub use hashlock::{FileEntry, HashManifest};
pub use releasepack::PackManifest;
pub use tracecheck::{TraceReport, TraceStatus};
