//! Staged git-workflow exercise harness.
//!
//! This crate drives the shell scripts under `linux/` and `windows/` that
//! walk a learner through a basic git workflow (init, feature branch, break
//! the code, revert, merge), and provides the subprocess wrappers used to
//! verify the repository state the scripts leave behind.
//!
//! The pieces:
//!
//! - [`stage::Stage`] names the five ordered workflow steps.
//! - [`script`] and [`command`] run the stage scripts and the git query
//!   commands; a nonzero exit code is an error carrying the captured stderr.
//! - [`python`] runs the entry scripts the stages create (`main.py`,
//!   `calc.py`) with input fed on stdin, without raising on failure.
//! - [`session::Session`] holds the script root and work root and knows how
//!   to clean up, including read-only git object files.
//! - [`workflow::StageChain`] runs the stages strictly in order, exactly
//!   once per session, capturing a [`workflow::StageSnapshot`] right after
//!   each one.

pub mod command;
pub mod error;
pub mod python;
pub mod script;
pub mod session;
pub mod stage;
pub mod workflow;

pub use error::{HarnessError, Result};
pub use session::Session;
pub use stage::Stage;
pub use workflow::{StageChain, StageSnapshot};
