//! Error types shared by the harness.
//!
//! The taxonomy is deliberately binary: an external invocation either
//! succeeded (exit code zero) or failed, and a failure is always fatal to
//! the current stage chain. No retries, no fallback.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving the exercise scripts.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A child process could not be spawned (missing binary, bad working
    /// directory), or a filesystem operation failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The resolved script path does not exist.
    #[error("script not found: {0}")]
    ScriptNotFound(PathBuf),

    /// A stage script exited with a non-zero status.
    #[error("script {script} failed (exit code {code:?}): {stderr}")]
    ScriptFailed {
        /// The script name (e.g. `init_git`).
        script: String,
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// The content of stderr.
        stderr: String,
    },

    /// A query command exited with a non-zero status.
    #[error("command '{cmd}' failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        /// The command line as given.
        cmd: String,
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// The content of stderr.
        stderr: String,
    },

    /// An earlier stage in the session already failed; the chain does not
    /// retry it, so everything after it fails with this error.
    #[error("an earlier stage failed, not re-running: {0}")]
    ChainPoisoned(String),
}

/// A specialized `Result` type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
