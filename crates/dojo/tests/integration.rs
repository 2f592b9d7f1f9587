//! End-to-end CLI integration tests for the `dojo` binary.
//!
//! Each test creates its own temporary work root and exercises the `dojo`
//! binary as a subprocess via `assert_cmd`. The script root is passed
//! explicitly so the tests do not depend on the process working directory.
//!
//! Requires `git`, `bash`, and a Python 3 interpreter on PATH.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Repo root, where `linux/` and `windows/` live.
fn scripts_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("crate should live two levels below the repo root")
        .to_path_buf()
}

/// Build a `Command` targeting the cargo-built `dojo` binary.
fn dojo(work: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dojo").unwrap();
    cmd.arg("--scripts")
        .arg(scripts_root())
        .arg("--work")
        .arg(work.path());
    cmd
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn stages_lists_all_five_in_order() {
    let tmp = TempDir::new().unwrap();
    let output = dojo(&tmp).arg("stages").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let names = [
        "init_git",
        "feature_branch",
        "break_code",
        "revert_code",
        "merge_to_main",
    ];
    let mut last = 0;
    for name in names {
        let pos = stdout.find(name).unwrap_or_else(|| panic!("{name} missing:\n{stdout}"));
        assert!(pos > last, "{name} out of order:\n{stdout}");
        last = pos;
    }
}

#[test]
fn stages_json_parses() {
    let tmp = TempDir::new().unwrap();
    let output = dojo(&tmp).args(["--json", "stages"]).output().unwrap();
    assert!(output.status.success());

    let stages: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let arr = stages.as_array().expect("stages --json should return array");
    assert_eq!(arr.len(), 5);
    assert_eq!(arr[0]["stage"], "init_git");
    assert_eq!(arr[4]["stage"], "merge_to_main");
}

#[test]
fn run_through_first_stage_creates_repo() {
    let tmp = TempDir::new().unwrap();
    dojo(&tmp)
        .args(["run", "--through", "init_git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init_git"));

    let task = tmp.path().join("git-task");
    assert!(task.is_dir(), "git-task was not created");
    assert!(task.join(".git").is_dir(), ".git was not created");
    assert!(task.join("main.py").is_file(), "main.py was not created");
}

#[test]
fn full_run_ends_on_main() {
    let tmp = TempDir::new().unwrap();
    let output = dojo(&tmp).args(["--json", "run"]).output().unwrap();
    assert!(
        output.status.success(),
        "run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let arr = report.as_array().expect("run --json should return array");
    assert_eq!(arr.len(), 5, "expected five stage reports");
    for entry in arr {
        assert_eq!(entry["ok"], true, "stage failed: {entry}");
    }
    assert_eq!(arr[4]["stage"], "merge_to_main");
    assert_eq!(arr[4]["branch"], "main");
}

#[test]
fn run_is_repeatable() {
    // A second run starts from a clean slate instead of tripping over the
    // first run's git-task.
    let tmp = TempDir::new().unwrap();
    dojo(&tmp)
        .args(["run", "--through", "feature_branch"])
        .assert()
        .success();
    dojo(&tmp)
        .args(["run", "--through", "init_git"])
        .assert()
        .success();
}

#[test]
fn run_rejects_unknown_stage() {
    let tmp = TempDir::new().unwrap();
    dojo(&tmp)
        .args(["run", "--through", "deploy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown stage"));
}

#[test]
fn demo_creates_calculator() {
    let tmp = TempDir::new().unwrap();
    dojo(&tmp).arg("demo").assert().success();
    assert!(
        tmp.path().join("demo-dir").join("calc.py").is_file(),
        "calc.py was not created"
    );
}

#[test]
fn clean_removes_working_directories() {
    let tmp = TempDir::new().unwrap();
    dojo(&tmp)
        .args(["run", "--through", "init_git"])
        .assert()
        .success();
    dojo(&tmp).arg("demo").assert().success();

    dojo(&tmp).arg("clean").assert().success();
    assert!(!tmp.path().join("git-task").exists());
    assert!(!tmp.path().join("demo-dir").exists());
}

#[test]
fn missing_scripts_root_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("dojo").unwrap();
    // No --scripts, and a cwd with nothing to discover above it.
    cmd.current_dir(tmp.path())
        .args(["--work"])
        .arg(tmp.path())
        .arg("clean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--scripts"));
}
