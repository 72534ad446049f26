//! Git submodule operations
//!
//! The actual submodule work is delegated to the `git` binary; this module
//! only owns the argument vectors and interprets exit statuses.

use anyhow::Result;
use std::io::Write;

use crate::process::{run_command, ProcessExecutor};

/// Argument vector for a recursive submodule init + update.
pub const SUBMODULE_SYNC: [&str; 5] = ["git", "submodule", "update", "--init", "--recursive"];

/// Command users run by hand to move submodules to their branch tips.
/// Printed as a hint after a successful sync, never executed here.
pub const SUBMODULE_UPDATE_REMOTE: &str = "git submodule update --remote";

/// Check if git is installed
pub fn is_available() -> bool {
    which::which("git").is_ok()
}

/// Initialize and update all submodules, recursively.
///
/// Strict: a non-zero git exit is an error, not a `false`.
pub fn sync_submodules(exec: &dyn ProcessExecutor, out: &mut dyn Write) -> Result<bool> {
    run_command(exec, out, &SUBMODULE_SYNC, true)
}
