use std::{
    path::PathBuf,
    process::{Command, Output},
};

fn puzzle(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("puzzles")
        .join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lumberjack"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to invoke the lumberjack binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn solves_small_puzzle() {
    let path = puzzle("small.toml");
    let output = run(&[path.to_str().expect("utf-8 path")]);

    assert!(output.status.success(), "solving should succeed");
    assert_eq!(stdout(&output), "minimum distance: 4\n");
}

#[test]
fn start_override_changes_the_answer() {
    let path = puzzle("small.toml");
    let output = run(&[path.to_str().expect("utf-8 path"), "--start", "2,2"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "minimum distance: 6\n");
}

#[test]
fn unsolvable_puzzle_is_an_answer_not_an_error() {
    let path = puzzle("moat.toml");
    let output = run(&[path.to_str().expect("utf-8 path")]);

    assert!(output.status.success(), "no solution still exits cleanly");
    assert_eq!(stdout(&output), "no solution\n");
}

#[test]
fn out_of_bounds_start_is_rejected() {
    let path = puzzle("small.toml");
    let output = run(&[path.to_str().expect("utf-8 path"), "--start", "-2,-2"]);

    assert!(!output.status.success(), "invalid input must fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("lies outside the 3x3 grid"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn exhausted_state_budget_is_an_error() {
    let path = puzzle("dense.toml");
    let output = run(&[path.to_str().expect("utf-8 path"), "--max-states", "10"]);

    assert!(!output.status.success(), "a blown budget must fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("budget of 10 forest states"), "unexpected stderr: {stderr}");
}

#[test]
fn json_report_lists_the_path() {
    let path = puzzle("small.toml");
    let output = run(&[path.to_str().expect("utf-8 path"), "--json"]);

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout is valid json");
    assert_eq!(report["distance"], 4);
    assert_eq!(
        report["path"],
        serde_json::json!([
            { "row": 0, "column": 0, "distance": 0 },
            { "row": 0, "column": 1, "distance": 1 },
            { "row": 2, "column": 0, "distance": 3 },
        ])
    );
}

#[test]
fn show_path_renders_every_chop() {
    let path = puzzle("dense.toml");
    let output = run(&[path.to_str().expect("utf-8 path"), "--show-path"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("start at (4, 4)\n"));
    assert!(text.contains("path: (4, 4) -> "));
    assert!(text.ends_with("minimum distance: 28\n"));
}

#[test]
fn missing_puzzle_file_is_reported() {
    let output = run(&["no-such-puzzle.toml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read puzzle at no-such-puzzle.toml"));
}
