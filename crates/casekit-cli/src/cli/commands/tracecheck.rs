//! `casekit tracecheck` - Validate traceability graph consistency.

use crate::cli::args::TracecheckArgs;
use crate::exit_codes;
use anyhow::{Context, Result};
use casekit_core::{tracecheck, Workspace};

pub fn run(args: TracecheckArgs) -> Result<i32> {
    let ws = Workspace::new(&args.repo_root);

    let report = tracecheck::run_check(&ws, args.allow_missing_evidence)
        .context("loading traceability tables")?;

    let report_path = ws.resolve(&args.report_path);
    tracecheck::write_report(&report, &report_path)
        .with_context(|| format!("writing report: {}", report_path.display()))?;

    if !report.passed() {
        for problem in &report.problems {
            println!("{problem}");
        }
        return Ok(exit_codes::CHECK_FAILED);
    }

    println!("tracecheck passed; report: {}", report_path.display());
    Ok(exit_codes::SUCCESS)
}
