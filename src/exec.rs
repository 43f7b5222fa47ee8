//! Shell execution of post-render hooks.
use anyhow::{Context as _, Result, bail};
use std::process::{Command, Output};

/// Result of a hook execution.
#[derive(Debug)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Run a post-render hook through the shell. An empty command is a no-op.
///
/// Hook and write are independent fallible steps: a failing hook is reported
/// by the caller but never rolls back files that were already written.
///
/// # Errors
///
/// Returns an error if the shell cannot be spawned or the command exits
/// non-zero; the error message carries the hook's stderr.
pub fn run_hook(command: &str) -> Result<()> {
    if command.trim().is_empty() {
        return Ok(());
    }

    #[cfg(windows)]
    let output = Command::new("cmd").args(["/C", command]).output();
    #[cfg(not(windows))]
    let output = Command::new("sh").args(["-c", command]).output();

    let output = output.with_context(|| format!("failed to spawn hook: {command}"))?;
    let result = ExecResult::from(output);
    if !result.success {
        bail!(
            "hook failed (exit {}): {}",
            result.code.unwrap_or(-1),
            result.stderr.trim()
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_hook_is_a_noop() {
        run_hook("").unwrap();
        run_hook("   ").unwrap();
    }

    #[test]
    fn successful_hook() {
        #[cfg(windows)]
        run_hook("echo hello").unwrap();
        #[cfg(not(windows))]
        run_hook("true").unwrap();
    }

    #[test]
    fn failing_hook_reports_exit_code() {
        #[cfg(windows)]
        let err = run_hook("exit 3").unwrap_err();
        #[cfg(not(windows))]
        let err = run_hook("exit 3").unwrap_err();
        assert!(err.to_string().contains("exit 3"));
    }

    #[cfg(not(windows))]
    #[test]
    fn hook_runs_through_the_shell() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ran");
        run_hook(&format!("touch {}", marker.display())).unwrap();
        assert!(marker.exists());
    }

    #[cfg(not(windows))]
    #[test]
    fn failing_hook_carries_stderr() {
        let err = run_hook("echo boom >&2; exit 1").unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
