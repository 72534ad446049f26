//! Fetch command - initialize dependencies managed as Git submodules
//!
//! Runs `git submodule update --init --recursive` once, reports the
//! outcome, and maps failure to host exit code 1. The actual checkout
//! state on disk is owned entirely by git.

use anyhow::Result;
use std::io::{self, Write};

use fetch_deps::git;
use fetch_deps::process::{ProcessExecutor, SystemExecutor};

pub fn execute() -> Result<i32> {
    if !git::is_available() {
        anyhow::bail!("git is not installed");
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    run(&SystemExecutor, &mut stdout.lock(), &mut stderr.lock())
}

/// Orchestration behind `execute`, with the executor and output streams
/// injected so tests can drive it without touching a real checkout.
fn run(exec: &dyn ProcessExecutor, out: &mut dyn Write, err: &mut dyn Write) -> Result<i32> {
    writeln!(out, "Initializing Git submodules...")?;

    if let Err(e) = git::sync_submodules(exec, out) {
        writeln!(err, "Error: Failed to initialize submodules: {e}")?;
        return Ok(1);
    }

    writeln!(out)?;
    writeln!(out, "✅ All submodules initialized successfully!")?;
    writeln!(out)?;
    writeln!(out, "Note: Dependencies are now managed as Git submodules.")?;
    writeln!(out, "To update submodules to latest commits on their branches:")?;
    writeln!(out, "  {}", git::SUBMODULE_UPDATE_REMOTE)?;

    Ok(0)
}
