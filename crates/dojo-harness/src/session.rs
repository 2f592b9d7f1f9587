//! Session paths and cleanup.
//!
//! A [`Session`] ties together the script root (the directory holding
//! `linux/` and `windows/`) and the work root (where the scripts create
//! their working directories). Cleanup tolerates read-only entries, since
//! git marks its object files read-only.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::script;

/// Directory the workflow scripts create and mutate.
pub const WORKFLOW_DIR: &str = "git-task";

/// Directory the standalone demo script creates.
pub const DEMO_DIR: &str = "demo-dir";

/// Script backing the standalone demo harness.
pub const DEMO_SCRIPT: &str = "example";

/// Entry script the workflow stages create and rewrite.
pub const ENTRY_SCRIPT: &str = "main.py";

/// Entry script the demo creates.
pub const DEMO_ENTRY_SCRIPT: &str = "calc.py";

/// Where the stage scripts live and where their working directories go.
#[derive(Debug, Clone)]
pub struct Session {
    scripts_root: PathBuf,
    work_root: PathBuf,
}

impl Session {
    pub fn new(scripts_root: impl Into<PathBuf>, work_root: impl Into<PathBuf>) -> Self {
        Self {
            scripts_root: scripts_root.into(),
            work_root: work_root.into(),
        }
    }

    /// Locate the script root by walking up from `start` looking for a
    /// directory that contains `linux/` or `windows/`.
    ///
    /// Returns `None` if the filesystem root is reached without finding one.
    pub fn find_scripts_root(start: &Path) -> Option<PathBuf> {
        let mut dir = start.to_path_buf();
        loop {
            if dir.join("linux").is_dir() || dir.join("windows").is_dir() {
                return Some(dir);
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    pub fn scripts_root(&self) -> &Path {
        &self.scripts_root
    }

    pub fn work_root(&self) -> &Path {
        &self.work_root
    }

    /// The workflow working directory (`git-task`) under the work root.
    pub fn workflow_dir(&self) -> PathBuf {
        self.work_root.join(WORKFLOW_DIR)
    }

    /// The demo working directory (`demo-dir`) under the work root.
    pub fn demo_dir(&self) -> PathBuf {
        self.work_root.join(DEMO_DIR)
    }

    /// Run the named stage script with the work root as its cwd.
    pub fn run_script(&self, name: &str) -> Result<String> {
        script::run_script(&self.scripts_root, &self.work_root, name)
    }

    /// Run the standalone demo script against a fresh `demo-dir`.
    pub fn run_demo(&self) -> Result<String> {
        remove_dir_all_robust(&self.demo_dir())?;
        self.run_script(DEMO_SCRIPT)
    }

    /// Remove both working directories.
    pub fn clean(&self) -> Result<()> {
        remove_dir_all_robust(&self.workflow_dir())?;
        remove_dir_all_robust(&self.demo_dir())
    }
}

/// Remove `path` recursively, tolerating read-only entries.
///
/// A plain `remove_dir_all` fails on read-only files on some platforms; when
/// it does, clear the read-only bit on everything under `path` and retry.
/// Missing paths are not an error.
pub fn remove_dir_all_robust(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "removing working directory");
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(_) => {
            clear_readonly(path)?;
            fs::remove_dir_all(path)?;
            Ok(())
        }
    }
}

fn clear_readonly(path: &Path) -> std::io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    let mut perms = meta.permissions();
    if perms.readonly() {
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        fs::set_permissions(path, perms)?;
    }
    if meta.is_dir() {
        for entry in fs::read_dir(path)? {
            clear_readonly(&entry?.path())?;
        }
    }
    Ok(())
}
