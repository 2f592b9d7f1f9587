//! `dojo clean` -- remove the working directories.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::context::RuntimeContext;

/// Execute the `dojo clean` command.
///
/// Removes `git-task` and `demo-dir` under the work root, clearing the
/// read-only bit git sets on object files where needed.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    ctx.session.clean()?;

    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "cleaned": true }))?
        );
    } else if !ctx.quiet {
        println!(
            "{:>6}  removed working directories under {}",
            "ok".green(),
            ctx.session.work_root().display()
        );
    }
    Ok(())
}
