//! `dojo demo` -- run the standalone calculator demo script.

use anyhow::Result;
use dojo_harness::session::{DEMO_ENTRY_SCRIPT, DEMO_SCRIPT};
use owo_colors::OwoColorize;

use crate::context::RuntimeContext;

/// Execute the `dojo demo` command.
///
/// Removes any stale `demo-dir` and runs the `example` script against a
/// fresh one.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    ctx.session.run_demo()?;

    let dir = ctx.session.demo_dir();
    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "script": DEMO_SCRIPT,
                "ok": true,
                "dir": dir.display().to_string(),
            }))?
        );
    } else if !ctx.quiet {
        println!(
            "{:>6}  {}  wrote {}",
            "ok".green(),
            DEMO_SCRIPT,
            dir.join(DEMO_ENTRY_SCRIPT).display()
        );
    }
    Ok(())
}
