//! Traceability graph consistency check.
//!
//! Validates the requirement → spec → test → evidence chain loaded
//! from the three relations under `safety-case/traceability`:
//!
//! 1. every `test_id` claimed by `spec_to_test` must have a row in
//!    `test_to_evidence`;
//! 2. every `evidence_artifact` referenced by `test_to_evidence` must
//!    exist on disk (unless the caller tolerates missing evidence,
//!    for early pipeline stages that have not produced it yet).
//!
//! An inconsistent chain is a normal, reportable outcome, not an
//! error; only unreadable or malformed tables are fatal.

use crate::config::Workspace;
use crate::error::Result;
use crate::fsio::write_pretty_json;
use crate::table;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceStatus {
    Pass,
    Fail,
}

/// The report artifact. `status` is `Fail` iff `problems` is
/// non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceReport {
    pub requirements: usize,
    pub spec_to_test_links: usize,
    pub test_to_evidence_links: usize,
    pub missing_evidence_mappings: Vec<String>,
    pub missing_evidence_files: Vec<String>,
    pub status: TraceStatus,
    pub problems: Vec<String>,
}

impl TraceReport {
    pub fn passed(&self) -> bool {
        self.status == TraceStatus::Pass
    }
}

/// Loads the three relations and computes the consistency report.
///
/// Relations are treated as sets of `test_id` for the difference
/// computation; row multiplicity only affects the raw counts.
pub fn run_check(ws: &Workspace, allow_missing_evidence: bool) -> Result<TraceReport> {
    let trace_dir = ws.trace_dir();
    let req_to_spec = table::load(&trace_dir.join("req_to_spec.csv"))?;
    let spec_to_test = table::load(&trace_dir.join("spec_to_test.csv"))?;
    let test_to_evidence = table::load(&trace_dir.join("test_to_evidence.csv"))?;

    let mut spec_ids = BTreeSet::new();
    for row in &spec_to_test.rows {
        spec_ids.insert(spec_to_test.require(row, "test_id")?.to_string());
    }
    let mut evidence_ids = BTreeSet::new();
    for row in &test_to_evidence.rows {
        evidence_ids.insert(test_to_evidence.require(row, "test_id")?.to_string());
    }

    // BTreeSet difference is already ascending.
    let missing_evidence_mappings: Vec<String> =
        spec_ids.difference(&evidence_ids).cloned().collect();

    let mut missing_files = BTreeSet::new();
    for row in &test_to_evidence.rows {
        let artifact = test_to_evidence.require(row, "evidence_artifact")?;
        if !ws.resolve(artifact).exists() {
            missing_files.insert(artifact.to_string());
        }
    }
    let missing_evidence_files: Vec<String> = missing_files.into_iter().collect();

    let mut problems = Vec::new();
    if !missing_evidence_mappings.is_empty() {
        problems.push(format!(
            "spec_to_test test IDs missing in test_to_evidence: {missing_evidence_mappings:?}"
        ));
    }
    if !missing_evidence_files.is_empty() && !allow_missing_evidence {
        problems.push(format!(
            "missing evidence files: {missing_evidence_files:?}"
        ));
    }

    let status = if problems.is_empty() {
        TraceStatus::Pass
    } else {
        TraceStatus::Fail
    };

    Ok(TraceReport {
        requirements: req_to_spec.len(),
        spec_to_test_links: spec_to_test.len(),
        test_to_evidence_links: test_to_evidence.len(),
        missing_evidence_mappings,
        missing_evidence_files,
        status,
        problems,
    })
}

/// Writes the report as indented JSON, creating parent directories.
pub fn write_report(report: &TraceReport, path: &Path) -> Result<()> {
    write_pretty_json(path, report)
}
