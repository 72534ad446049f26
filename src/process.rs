//! Child process execution
//!
//! Commands run with inherited stdout/stderr so their output reaches the
//! terminal live, interleaved with ours. The `ProcessExecutor` trait is the
//! seam tests use to substitute a fake executor.

use anyhow::{Context, Result};
use std::io::Write;
use std::process::Command;
use thiserror::Error;

/// A child process exited with a non-zero status.
#[derive(Debug, Error)]
#[error("command exited with code {code}")]
pub struct ProcessFailure {
    pub code: i32,
}

/// Run an argument vector and report the child's exit status
pub trait ProcessExecutor {
    /// Execute `command`, blocking until the child exits.
    ///
    /// The child inherits the parent's stdout/stderr. Returns the exit
    /// code; a spawn failure (e.g. executable not on PATH) is an `Err`.
    fn status(&self, command: &[&str]) -> Result<i32>;
}

/// Executor backed by `std::process::Command`.
pub struct SystemExecutor;

impl ProcessExecutor for SystemExecutor {
    fn status(&self, command: &[&str]) -> Result<i32> {
        let status = Command::new(command[0])
            .args(&command[1..])
            .status()
            .with_context(|| format!("Failed to execute {}", command[0]))?;

        // Killed-by-signal children have no code; treat as failure
        Ok(status.code().unwrap_or(1))
    }
}

/// Echo and run a command.
///
/// Prints a `Running:` line so users can see what is being invoked, then
/// blocks until the child exits. With `check` set, a non-zero exit becomes
/// a [`ProcessFailure`] error; otherwise the exit status is reported as a
/// bool.
pub fn run_command(
    exec: &dyn ProcessExecutor,
    out: &mut dyn Write,
    command: &[&str],
    check: bool,
) -> Result<bool> {
    if command.is_empty() {
        anyhow::bail!("No command provided");
    }

    writeln!(out, "Running: {}", command.join(" "))?;
    // Flush so the echo precedes the child's interleaved output
    out.flush()?;

    let code = exec.status(command)?;

    if check && code != 0 {
        return Err(ProcessFailure { code }.into());
    }

    Ok(code == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStatus(i32);

    impl ProcessExecutor for FixedStatus {
        fn status(&self, _command: &[&str]) -> Result<i32> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_empty_command_rejected() {
        let mut out = Vec::new();
        let err = run_command(&FixedStatus(0), &mut out, &[], true).unwrap_err();
        assert!(err.to_string().contains("No command provided"));
    }

    #[test]
    fn test_echoes_command_before_running() {
        let mut out = Vec::new();
        run_command(&FixedStatus(0), &mut out, &["git", "--version"], true).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "Running: git --version\n");
    }

    #[test]
    fn test_zero_exit_is_success() {
        let mut out = Vec::new();
        assert!(run_command(&FixedStatus(0), &mut out, &["git"], true).unwrap());
    }

    #[test]
    fn test_nonzero_exit_without_check_is_reported() {
        let mut out = Vec::new();
        assert!(!run_command(&FixedStatus(128), &mut out, &["git"], false).unwrap());
    }

    #[test]
    fn test_nonzero_exit_with_check_fails_with_code() {
        let mut out = Vec::new();
        let err = run_command(&FixedStatus(128), &mut out, &["git"], true).unwrap_err();
        let failure = err.downcast_ref::<ProcessFailure>().unwrap();
        assert_eq!(failure.code, 128);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_executor_reports_exit_codes() {
        let exec = SystemExecutor;
        assert_eq!(exec.status(&["true"]).unwrap(), 0);
        assert_ne!(exec.status(&["false"]).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_executor_spawn_failure_is_error() {
        let exec = SystemExecutor;
        let err = exec.status(&["fetch-deps-no-such-binary"]).unwrap_err();
        assert!(err.to_string().contains("Failed to execute"));
    }
}
