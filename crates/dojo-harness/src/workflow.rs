//! The staged workflow chain.
//!
//! Five setup scripts, each depending on the prior, each run exactly once
//! per session. Test binaries schedule tests on several threads in
//! arbitrary order, so the ordering guarantee cannot be left to declaration
//! order: every caller goes through [`StageChain::ensure`], which holds a
//! lock and replays any not-yet-run predecessors in ordinal order.
//!
//! Because a later stage rewrites the very state an earlier stage's checks
//! look at (the entry script's source and output), the chain captures a
//! [`StageSnapshot`] immediately after each script finishes. Checks assert
//! against the snapshot of their stage, which stays valid no matter how far
//! the chain has advanced since.

use std::fs;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::command::run_cmd;
use crate::error::{HarnessError, Result};
use crate::python::{EntryOutput, run_entry};
use crate::session::{ENTRY_SCRIPT, Session};
use crate::stage::Stage;

/// State of `git-task`, captured right after one stage's script finished
/// and before any later stage could mutate it.
///
/// Everything is opaque text from `git` or the entry script; no history is
/// modeled.
#[derive(Debug)]
pub struct StageSnapshot {
    /// The stage this snapshot belongs to.
    pub stage: Stage,
    /// Source text of `main.py` (empty if the file is missing).
    pub entry_source: String,
    /// Result of running `main.py` with the stage's probe input.
    pub entry_run: EntryOutput,
    /// `git status` output.
    pub status: String,
    /// `git status --porcelain` output (empty means a clean tree).
    pub porcelain: String,
    /// `git branch` listing.
    pub branches: String,
    /// `git branch --show-current` output.
    pub current_branch: String,
    /// `git rev-parse HEAD`.
    pub head: String,
    /// `git rev-parse HEAD~2`, if that revision exists yet.
    pub head_minus_two: Option<String>,
    /// `git log -1 --pretty=%B`, the latest commit message.
    pub last_message: String,
}

impl StageSnapshot {
    fn capture(session: &Session, stage: Stage) -> Result<Self> {
        let dir = session.workflow_dir();

        // A missing entry script shows up in the existence checks, not here.
        let entry_source = fs::read_to_string(dir.join(ENTRY_SCRIPT)).unwrap_or_default();

        let input = match stage.probe_input() {
            Some(name) => format!("{name}\n"),
            None => String::new(),
        };
        let entry_run = run_entry(&dir, ENTRY_SCRIPT, &input)?;

        Ok(Self {
            stage,
            entry_source,
            entry_run,
            status: run_cmd("git status", &dir)?,
            porcelain: run_cmd("git status --porcelain", &dir)?,
            branches: run_cmd("git branch", &dir)?,
            current_branch: run_cmd("git branch --show-current", &dir)?,
            head: run_cmd("git rev-parse HEAD", &dir)?,
            head_minus_two: run_cmd("git rev-parse HEAD~2", &dir).ok(),
            last_message: run_cmd("git log -1 --pretty=%B", &dir)?,
        })
    }
}

#[derive(Default)]
struct ChainState {
    /// Snapshots of the stages that have completed, in order.
    snapshots: Vec<Arc<StageSnapshot>>,
    /// Set when a stage fails; later calls get [`HarnessError::ChainPoisoned`].
    failed: Option<String>,
}

/// Strictly ordered, once-per-session execution of the workflow stages.
///
/// Creating the chain cleans the work root, so a session always starts from
/// nothing. A failed stage is never retried: its error poisons the chain
/// and every later [`ensure`](Self::ensure) call reports it.
pub struct StageChain {
    session: Session,
    state: Mutex<ChainState>,
}

impl StageChain {
    pub fn new(session: Session) -> Result<Self> {
        session.clean()?;
        Ok(Self {
            session,
            state: Mutex::new(ChainState::default()),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run every stage up to and including `stage` that has not run yet,
    /// and return `stage`'s snapshot.
    pub fn ensure(&self, stage: Stage) -> Result<Arc<StageSnapshot>> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(message) = &state.failed {
            return Err(HarnessError::ChainPoisoned(message.clone()));
        }

        while state.snapshots.len() <= stage.ordinal() {
            let next = Stage::ALL[state.snapshots.len()];
            debug!(stage = %next, "running stage setup");
            match self.run_stage(next) {
                Ok(snapshot) => state.snapshots.push(Arc::new(snapshot)),
                Err(e) => {
                    state.failed = Some(e.to_string());
                    return Err(e);
                }
            }
        }

        Ok(Arc::clone(&state.snapshots[stage.ordinal()]))
    }

    fn run_stage(&self, stage: Stage) -> Result<StageSnapshot> {
        self.session.run_script(stage.script_name())?;
        StageSnapshot::capture(&self.session, stage)
    }
}
