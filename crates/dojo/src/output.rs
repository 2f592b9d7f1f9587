//! Output formatting helpers for the `dojo` CLI.

use anyhow::Result;
use dojo_harness::StageSnapshot;
use owo_colors::OwoColorize;
use serde::Serialize;

/// One stage's outcome in a run report.
#[derive(Serialize)]
pub struct StageReport {
    pub stage: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StageReport {
    pub fn ok(snapshot: &StageSnapshot) -> Self {
        Self {
            stage: snapshot.stage.to_string(),
            ok: true,
            branch: Some(snapshot.current_branch.clone()),
            head: Some(short_hash(&snapshot.head)),
            error: None,
        }
    }

    pub fn failed(stage: String, error: String) -> Self {
        Self {
            stage,
            ok: false,
            branch: None,
            head: None,
            error: Some(error),
        }
    }
}

/// Abbreviate a commit hash for display.
fn short_hash(hash: &str) -> String {
    hash.get(..7).unwrap_or(hash).to_string()
}

/// Print one human-readable status line for a stage.
pub fn print_stage_line(report: &StageReport, quiet: bool) {
    if quiet {
        return;
    }
    if report.ok {
        let detail = match (&report.branch, &report.head) {
            (Some(branch), Some(head)) => format!("  [{branch} {head}]"),
            _ => String::new(),
        };
        println!("{:>6}  {}{}", "ok".green(), report.stage, detail);
    } else {
        let reason = report.error.as_deref().unwrap_or("unknown error");
        println!("{:>6}  {}  {}", "FAILED".red(), report.stage, reason);
    }
}

/// Print the full run report as pretty JSON.
pub fn print_json(reports: &[StageReport]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}
