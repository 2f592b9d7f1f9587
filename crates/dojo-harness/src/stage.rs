//! The five ordered steps of the git workflow exercise.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One step of the workflow exercise, backed by one external script.
///
/// The variants are ordered: each stage's script assumes every earlier
/// script has already run against the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Create `git-task`, commit a working `main.py` on `main`.
    InitGit,
    /// Branch `feature/hello-name`, make the greeting read a name.
    FeatureBranch,
    /// Commit a typo that makes `main.py` crash.
    BreakCode,
    /// Revert the bad commit.
    RevertCode,
    /// Check out `main` and merge the feature branch.
    MergeToMain,
}

impl Stage {
    /// All stages, in execution order.
    pub const ALL: [Stage; 5] = [
        Stage::InitGit,
        Stage::FeatureBranch,
        Stage::BreakCode,
        Stage::RevertCode,
        Stage::MergeToMain,
    ];

    /// The script name this stage resolves to (`linux/<name>.sh`,
    /// `windows/<name>.bat`).
    pub fn script_name(self) -> &'static str {
        match self {
            Stage::InitGit => "init_git",
            Stage::FeatureBranch => "feature_branch",
            Stage::BreakCode => "break_code",
            Stage::RevertCode => "revert_code",
            Stage::MergeToMain => "merge_to_main",
        }
    }

    /// Zero-based position in the workflow.
    pub fn ordinal(self) -> usize {
        match self {
            Stage::InitGit => 0,
            Stage::FeatureBranch => 1,
            Stage::BreakCode => 2,
            Stage::RevertCode => 3,
            Stage::MergeToMain => 4,
        }
    }

    /// One-line description for listings.
    pub fn summary(self) -> &'static str {
        match self {
            Stage::InitGit => "create git-task and commit a working main.py on main",
            Stage::FeatureBranch => "branch feature/hello-name and greet the user by name",
            Stage::BreakCode => "commit a typo that makes main.py crash",
            Stage::RevertCode => "revert the bad commit",
            Stage::MergeToMain => "merge the feature branch back into main",
        }
    }

    /// Name fed to the entry script's stdin when capturing this stage's
    /// snapshot. `None` means the script is run without input (the initial
    /// `main.py` does not read stdin).
    pub fn probe_input(self) -> Option<&'static str> {
        match self {
            Stage::InitGit => None,
            Stage::FeatureBranch => Some("Alice"),
            Stage::BreakCode => Some("Bob"),
            Stage::RevertCode => Some("Charlie"),
            Stage::MergeToMain => Some("Diana"),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.script_name())
    }
}

/// Error returned when parsing an unknown stage name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);

impl FromStr for Stage {
    type Err = ParseStageError;

    /// Accepts the script name, with `-` and `_` interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "init_git" => Ok(Stage::InitGit),
            "feature_branch" => Ok(Stage::FeatureBranch),
            "break_code" => Ok(Stage::BreakCode),
            "revert_code" => Ok(Stage::RevertCode),
            "merge_to_main" => Ok(Stage::MergeToMain),
            _ => Err(ParseStageError(s.to_string())),
        }
    }
}
