//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds the resolved [`Session`] (script root plus
//! work root) and the global output flags. Constructed once in `main` after
//! CLI parsing, before command dispatch.

use std::env;

use anyhow::{Context as _, Result};
use dojo_harness::Session;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Resolved script root and work root.
    pub session: Session,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// The script root is resolved as: `--scripts` flag > `DOJO_SCRIPTS`
    /// env (via clap) > walking up from the current directory looking for
    /// `linux/` or `windows/`. The work root defaults to the current
    /// directory.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().context("failed to get current directory")?;

        let scripts_root = match &global.scripts {
            Some(path) => path.clone(),
            None => Session::find_scripts_root(&cwd).context(
                "no linux/ or windows/ script directory found here or above; pass --scripts",
            )?,
        };

        let work_root = global.work.clone().unwrap_or(cwd);

        Ok(Self {
            session: Session::new(scripts_root, work_root),
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        })
    }
}
