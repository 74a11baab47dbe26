use casekit_core::config;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "casekit",
    version,
    about = "Safety-case evidence pipeline tools — hash manifests, release packs, replay checks, and traceability reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a deterministic hash manifest for evidence artifacts
    Hashlock(HashlockArgs),
    /// Bundle evidence files into a release tarball plus manifest
    Releasepack(ReleasepackArgs),
    /// Compare replay tip hash values from two files
    Replaycheck(ReplaycheckArgs),
    /// Validate traceability graph consistency and emit a JSON report
    Tracecheck(TracecheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct HashlockArgs {
    /// Repository root all relative paths resolve against
    #[arg(long, default_value = ".")]
    pub repo_root: PathBuf,

    /// Directory to hash, relative to the root
    #[arg(long, default_value = config::DEFAULT_INPUT_DIR)]
    pub input_dir: String,

    /// Manifest output path
    #[arg(long, default_value = config::DEFAULT_HASHLOCK_PATH)]
    pub output: String,
}

#[derive(Args, Debug, Clone)]
pub struct ReleasepackArgs {
    /// Repository root all relative paths resolve against
    #[arg(long, default_value = ".")]
    pub repo_root: PathBuf,

    /// Archive output path
    #[arg(long, default_value = config::DEFAULT_PACKAGE_PATH)]
    pub output: String,

    /// Side-car manifest path
    #[arg(long, default_value = config::DEFAULT_PACK_MANIFEST_PATH)]
    pub manifest: String,

    /// Relative paths to include (defaults to the standard evidence set)
    #[arg(long, num_args = 1..)]
    pub include: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ReplaycheckArgs {
    /// First recorded hash file
    #[arg(long)]
    pub first: PathBuf,

    /// Second recorded hash file
    #[arg(long)]
    pub second: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct TracecheckArgs {
    /// Repository root all relative paths resolve against
    #[arg(long, default_value = ".")]
    pub repo_root: PathBuf,

    /// Tolerate evidence artifacts that do not exist yet (missing
    /// test_id mappings still fail)
    #[arg(long)]
    pub allow_missing_evidence: bool,

    /// Report output path
    #[arg(long, default_value = config::DEFAULT_REPORT_PATH)]
    pub report_path: String,
}
