//! Entry-script execution.
//!
//! Runs the small interpreted programs the stage scripts create (`main.py`,
//! `calc.py`), feeding a string to their stdin. Unlike [`crate::script`] and
//! [`crate::command`] this does not raise on a non-zero exit code: the
//! `break_code` stage deliberately breaks the program, and the caller
//! asserts on the failure.

use std::env;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::Result;

/// Captured result of one entry-script run.
#[derive(Debug, Clone)]
pub struct EntryOutput {
    /// The exit code, or `None` if the process was killed by a signal.
    pub code: Option<i32>,
    /// Trimmed stdout.
    pub stdout: String,
    /// Trimmed stderr.
    pub stderr: String,
}

impl EntryOutput {
    /// True if the script exited with code zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Resolve the Python interpreter to use.
///
/// Priority: `DOJO_PYTHON` env > `python` on Windows > `python3` elsewhere.
pub fn interpreter() -> String {
    if let Ok(python) = env::var("DOJO_PYTHON") {
        if !python.is_empty() {
            return python;
        }
    }
    if cfg!(windows) {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}

/// Run `script` inside `dir`, writing `input` to its stdin.
///
/// Returns the captured output whether or not the script succeeded; only a
/// spawn failure (interpreter missing, bad directory) is an error.
pub fn run_entry(dir: &Path, script: &str, input: &str) -> Result<EntryOutput> {
    let python = interpreter();
    debug!(%python, script, cwd = %dir.display(), "running entry script");

    let mut child = Command::new(&python)
        .arg(script)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Dropping the handle closes the script's stdin.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    let result = EntryOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    };
    debug!(script, code = ?result.code, "entry script finished");
    Ok(result)
}
