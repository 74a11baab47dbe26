//! Unified exit codes for all casekit subcommands.
//! These codes are part of the public contract the surrounding
//! pipeline scripts depend on.

pub const SUCCESS: i32 = 0;
pub const CHECK_FAILED: i32 = 1; // Replay hash mismatch or traceability inconsistency
pub const INTERNAL_ERROR: i32 = 2; // Fatal I/O or malformed input
