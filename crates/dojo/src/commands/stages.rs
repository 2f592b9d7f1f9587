//! `dojo stages` -- list the workflow stages in order.

use anyhow::Result;
use dojo_harness::Stage;

use crate::context::RuntimeContext;

/// Execute the `dojo stages` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    if ctx.json {
        let stages: Vec<_> = Stage::ALL
            .into_iter()
            .map(|stage| {
                serde_json::json!({
                    "stage": stage.to_string(),
                    "summary": stage.summary(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&stages)?);
    } else {
        for stage in Stage::ALL {
            println!(
                "{}. {:<15} {}",
                stage.ordinal() + 1,
                stage.script_name(),
                stage.summary()
            );
        }
    }
    Ok(())
}
