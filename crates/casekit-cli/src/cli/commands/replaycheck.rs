//! `casekit replaycheck` - Compare replay tip hash values from two files.

use crate::cli::args::ReplaycheckArgs;
use crate::exit_codes;
use anyhow::{Context, Result};
use casekit_core::replay;

pub fn run(args: ReplaycheckArgs) -> Result<i32> {
    let first = replay::read_hash(&args.first)
        .with_context(|| format!("reading first hash: {}", args.first.display()))?;
    let second = replay::read_hash(&args.second)
        .with_context(|| format!("reading second hash: {}", args.second.display()))?;

    if first != second {
        println!("replay hash mismatch: {first} != {second}");
        return Ok(exit_codes::CHECK_FAILED);
    }

    println!("replay hash match: {first}");
    Ok(exit_codes::SUCCESS)
}
