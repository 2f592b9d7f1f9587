//! `dojo run` -- execute the workflow stages in order from a clean slate.

use anyhow::Result;
use dojo_harness::{Stage, StageChain};
use tracing::debug;

use crate::cli::RunArgs;
use crate::context::RuntimeContext;
use crate::output::{self, StageReport};

/// Execute the `dojo run` command.
///
/// Cleans the work root, then runs every stage up to `--through` (default:
/// all five) in order. The first failure stops the run; the stages after it
/// are never reached.
pub fn run(ctx: &RuntimeContext, args: &RunArgs) -> Result<()> {
    let through = args.through.unwrap_or(Stage::MergeToMain);
    debug!(%through, work = %ctx.session.work_root().display(), "starting stage chain");
    let chain = StageChain::new(ctx.session.clone())?;

    let mut reports = Vec::new();
    let mut failure = None;

    for stage in Stage::ALL.into_iter().take(through.ordinal() + 1) {
        match chain.ensure(stage) {
            Ok(snapshot) => {
                let report = StageReport::ok(&snapshot);
                if !ctx.json {
                    output::print_stage_line(&report, ctx.quiet);
                }
                reports.push(report);
            }
            Err(e) => {
                let report = StageReport::failed(stage.to_string(), e.to_string());
                if !ctx.json {
                    output::print_stage_line(&report, ctx.quiet);
                }
                reports.push(report);
                failure = Some(e);
                break;
            }
        }
    }

    if ctx.json {
        output::print_json(&reports)?;
    }

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
