//! Platform script resolution and execution.
//!
//! Each stage is backed by one script: `linux/<name>.sh` run via `bash` on
//! unix, `windows/<name>.bat` run via `cmd /C` on Windows. The script runs
//! with the work root as its working directory and an absolute path, so it
//! creates its working directory (e.g. `git-task`) under the work root.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{HarnessError, Result};

/// Resolve the platform-appropriate path of the named script.
pub fn script_path(scripts_root: &Path, name: &str) -> PathBuf {
    if cfg!(windows) {
        scripts_root.join("windows").join(format!("{name}.bat"))
    } else {
        scripts_root.join("linux").join(format!("{name}.sh"))
    }
}

fn script_command(path: &Path) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(path);
        cmd
    } else {
        let mut cmd = Command::new("bash");
        cmd.arg(path);
        cmd
    }
}

/// Run the named stage script with `work_root` as its working directory.
///
/// Returns the trimmed contents of stdout on success.
///
/// # Errors
///
/// Returns [`HarnessError::ScriptNotFound`] if the resolved path does not
/// exist, [`HarnessError::Io`] if the interpreter cannot be spawned, or
/// [`HarnessError::ScriptFailed`] (carrying the captured stderr) on a
/// non-zero exit code. There is no retry and no timeout; the caller's chain
/// stops at the first failure.
pub fn run_script(scripts_root: &Path, work_root: &Path, name: &str) -> Result<String> {
    let path = script_path(scripts_root, name);
    if !path.is_file() {
        return Err(HarnessError::ScriptNotFound(path));
    }

    debug!(script = name, path = %path.display(), cwd = %work_root.display(), "running script");
    let output = script_command(&path).current_dir(work_root).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(HarnessError::ScriptFailed {
            script: name.to_string(),
            code: output.status.code(),
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!(script = name, "script succeeded");
    Ok(stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[cfg(unix)]
    fn write_script(root: &Path, name: &str, body: &str) {
        let dir = root.join("linux");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{name}.sh")), body).unwrap();
    }

    #[test]
    fn test_script_path_unix_layout() {
        if cfg!(unix) {
            let path = script_path(Path::new("/repo"), "init_git");
            assert_eq!(path, PathBuf::from("/repo/linux/init_git.sh"));
        }
    }

    #[test]
    fn test_missing_script() {
        let tmp = tempfile::tempdir().unwrap();
        let result = run_script(tmp.path(), tmp.path(), "no_such_stage");
        match result.unwrap_err() {
            HarnessError::ScriptNotFound(path) => {
                assert!(path.to_string_lossy().contains("no_such_stage"));
            }
            other => panic!("expected ScriptNotFound, got: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_script_captures_stdout() {
        let tmp = tempfile::tempdir().unwrap();
        write_script(tmp.path(), "hello", "echo hello from script\n");
        let out = run_script(tmp.path(), tmp.path(), "hello").unwrap();
        assert_eq!(out, "hello from script");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_script_failure_carries_stderr() {
        let tmp = tempfile::tempdir().unwrap();
        write_script(tmp.path(), "boom", "echo it broke >&2\nexit 3\n");
        match run_script(tmp.path(), tmp.path(), "boom").unwrap_err() {
            HarnessError::ScriptFailed { script, code, stderr } => {
                assert_eq!(script, "boom");
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "it broke");
            }
            other => panic!("expected ScriptFailed, got: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_script_runs_in_work_root() {
        let tmp = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();
        write_script(tmp.path(), "touch", "mkdir made-here\n");
        run_script(tmp.path(), work.path(), "touch").unwrap();
        assert!(work.path().join("made-here").is_dir());
    }
}
