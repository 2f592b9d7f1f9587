//! Clap CLI definitions for the `dojo` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dojo_harness::Stage;
use dojo_harness::stage::ParseStageError;

/// dojo -- staged git-workflow exercise driver.
///
/// Runs the exercise scripts under linux/ and windows/ in order and reports
/// the repository state they leave behind.
#[derive(Parser, Debug)]
#[command(
    name = "dojo",
    about = "Run the git workflow exercise scripts and inspect the result",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Script root containing linux/ and windows/ (default: walk up from
    /// the current directory).
    #[arg(long, global = true, env = "DOJO_SCRIPTS")]
    pub scripts: Option<PathBuf>,

    /// Directory under which the working directories are created
    /// (default: current directory).
    #[arg(long, global = true, env = "DOJO_WORK")]
    pub work: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the workflow stages in order from a clean slate.
    Run(RunArgs),

    /// Run the standalone calculator demo script.
    Demo,

    /// List the workflow stages in order.
    Stages,

    /// Remove the working directories (git-task, demo-dir).
    Clean,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Last stage to run (default: merge_to_main).
    #[arg(long, value_parser = parse_stage)]
    pub through: Option<Stage>,
}

fn parse_stage(s: &str) -> Result<Stage, String> {
    s.parse().map_err(|e: ParseStageError| e.to_string())
}
