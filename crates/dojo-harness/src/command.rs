//! Shell command execution for state queries.
//!
//! Thin wrapper around the platform command interpreter (`sh -c` on unix,
//! `cmd /C` on Windows), used to query the state a stage script left behind
//! (current branch, commit log, working-tree status). The output is treated
//! as opaque text; callers do substring and equality checks on it.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{HarnessError, Result};

fn shell_command(cmd: &str) -> Command {
    if cfg!(windows) {
        let mut shell = Command::new("cmd");
        shell.arg("/C").arg(cmd);
        shell
    } else {
        let mut shell = Command::new("sh");
        shell.arg("-c").arg(cmd);
        shell
    }
}

/// Execute a literal command line in `cwd` via the platform shell.
///
/// Returns the trimmed contents of stdout on success.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the shell cannot be spawned, or
/// [`HarnessError::CommandFailed`] (carrying the captured stderr) if the
/// command exits with a non-zero status.
///
/// # Examples
///
/// ```no_run
/// use dojo_harness::command::run_cmd;
/// use std::path::Path;
///
/// let branch = run_cmd("git branch --show-current", Path::new("git-task")).unwrap();
/// println!("Current branch: {branch}");
/// ```
pub fn run_cmd(cmd: &str, cwd: &Path) -> Result<String> {
    debug!(cmd, cwd = %cwd.display(), "running query command");
    let output = shell_command(cmd).current_dir(cwd).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(HarnessError::CommandFailed {
            cmd: cmd.to_string(),
            code: output.status.code(),
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_cmd_git_version() {
        // `git --version` should succeed on any system with git installed.
        let result = run_cmd("git --version", Path::new("."));
        assert!(result.is_ok(), "git --version failed: {result:?}");
        let output = result.unwrap();
        assert!(
            output.starts_with("git version"),
            "unexpected output: {output}"
        );
    }

    #[test]
    fn test_run_cmd_failure() {
        // An invalid git subcommand should fail.
        let result = run_cmd("git not-a-real-subcommand", Path::new("."));
        assert!(result.is_err());
        match result.unwrap_err() {
            HarnessError::CommandFailed { cmd, code, stderr } => {
                assert_eq!(cmd, "git not-a-real-subcommand");
                assert!(code.is_some());
                assert!(!stderr.is_empty());
            }
            other => panic!("expected CommandFailed, got: {other:?}"),
        }
    }

    #[test]
    fn test_run_cmd_bad_cwd() {
        // Running in a nonexistent directory should fail.
        let result = run_cmd("git status", Path::new("/nonexistent/directory/xyz"));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_cmd_trims_output() {
        let out = run_cmd("echo '  padded  '", Path::new(".")).unwrap();
        assert_eq!(out, "padded");
    }
}
