//! `casekit hashlock` - Deterministic hash manifest for evidence artifacts.

use crate::cli::args::HashlockArgs;
use crate::exit_codes;
use anyhow::{Context, Result};
use casekit_core::{hashlock, Workspace};

pub fn run(args: HashlockArgs) -> Result<i32> {
    let ws = Workspace::new(&args.repo_root);

    let manifest = hashlock::build_manifest(&ws, &args.input_dir)
        .with_context(|| format!("hashing files under {}", args.input_dir))?;

    let output = ws.resolve(&args.output);
    hashlock::write_manifest(&manifest, &output)
        .with_context(|| format!("writing manifest: {}", output.display()))?;

    println!("wrote {}", output.display());
    Ok(exit_codes::SUCCESS)
}
