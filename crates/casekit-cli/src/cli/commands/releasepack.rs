//! `casekit releasepack` - Release evidence tarball plus manifest summary.

use crate::cli::args::ReleasepackArgs;
use crate::exit_codes;
use anyhow::{Context, Result};
use casekit_core::{config, releasepack, Workspace};

pub fn run(args: ReleasepackArgs) -> Result<i32> {
    let ws = Workspace::new(&args.repo_root);

    let include: Vec<String> = if args.include.is_empty() {
        config::DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect()
    } else {
        args.include.clone()
    };

    let manifest = releasepack::build_pack(&ws, &include, &args.output)
        .with_context(|| format!("building release pack: {}", args.output))?;

    let manifest_path = ws.resolve(&args.manifest);
    releasepack::write_pack_manifest(&manifest, &manifest_path)
        .with_context(|| format!("writing pack manifest: {}", manifest_path.display()))?;

    println!(
        "built {} with {} files",
        ws.resolve(&args.output).display(),
        manifest.included.len()
    );
    Ok(exit_codes::SUCCESS)
}
