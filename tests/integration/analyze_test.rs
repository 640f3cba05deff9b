//! Integration tests for the analyze command (CLI)

use std::fs;

use predicates::prelude::*;
use serde_json::Value;

use crate::helpers::Sandbox;

fn read_json(sandbox: &Sandbox, dir: &str, file: &str) -> Value {
    let path = sandbox.path(dir).join(file);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content).expect("valid json")
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn analyze_help_shows_usage() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["analyze", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("<FILE>"));
    assert!(stdout.contains("--summary"));
    assert!(stdout.contains("--strict"));
}

#[test]
fn analyze_without_file_is_a_usage_error() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = sandbox.run(&["analyze"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<FILE>"));
}

// ============================================================================
// JSON Report Tests
// ============================================================================

#[test]
fn analyze_writes_every_json_file() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("match.txt");

    sandbox
        .command()
        .arg("analyze")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("3 rallies, 0 failed"))
        .stderr(predicate::str::contains("Wrote 10 files to analysis"));

    for name in [
        "serves.json",
        "receptions.json",
        "setsK1.json",
        "setsK2.json",
        "setsK1_pos1.json",
        "hits.json",
        "breakpoints.json",
        "breakpoints_players.json",
        "serve_positions.json",
        "serve_types.json",
    ] {
        assert!(
            sandbox.path("analysis").join(name).exists(),
            "{} missing",
            name
        );
    }
}

#[test]
fn analyze_counts_serves_and_receptions() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("match.txt");
    let (_stdout, stderr, exit_code) =
        sandbox.run(&["analyze", file.to_str().unwrap(), "--out", "stats"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    // player 1 jump serve into zone 5, received
    let serves = read_json(&sandbox, "stats", "serves.json");
    assert_eq!(serves["1"]["2"]["5"]["3"], 1);
    // player 2 float serve into zone 4, error
    assert_eq!(serves["2"]["1"]["4"]["4"], 1);

    let receptions = read_json(&sandbox, "stats", "receptions.json");
    assert!(receptions.get("3").is_some());
    assert!(receptions.get("9").is_some());

    let positions = read_json(&sandbox, "stats", "serve_positions.json");
    assert_eq!(positions["5"], 4);

    let types = read_json(&sandbox, "stats", "serve_types.json");
    assert_eq!(types["3"], "jump_after_float_toss");
}

#[test]
fn analyze_tracks_breakpoints_by_rotation() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("practice.txt");
    let (_stdout, stderr, exit_code) = sandbox.run(&["analyze", file.to_str().unwrap()]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let breaks = read_json(&sandbox, "analysis", "breakpoints.json");
    assert_eq!(breaks["3"], 1);
    assert_eq!(breaks["0"], 0);

    let players = read_json(&sandbox, "analysis", "breakpoints_players.json");
    assert_eq!(players["1"], 2);
}

#[test]
fn analyze_uses_configured_output_directory() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[output]\ndirectory = \"reports\"\n");
    let file = sandbox.fixture("practice.txt");

    let (_stdout, _stderr, exit_code) = sandbox.run(&["analyze", file.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(sandbox.path("reports").join("serves.json").exists());
    assert!(!sandbox.path("analysis").exists());
}

// ============================================================================
// Failure Handling Tests
// ============================================================================

#[test]
fn analyze_rolls_back_failed_rallies_and_continues() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("broken.txt");
    let (_stdout, stderr, exit_code) = sandbox.run(&["analyze", file.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("3 rallies, 2 failed, 0 warnings"));
    assert_eq!(stderr.matches("rally 2, token 3").count(), 1, "stderr: {}", stderr);

    let serves = read_json(&sandbox, "analysis", "serves.json");
    // only the ace of rally 1 survives
    assert_eq!(serves["1"]["2"]["1"]["1"], 1);
}

#[test]
fn analyze_strict_stops_at_first_failure() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("broken.txt");
    let (_stdout, stderr, exit_code) =
        sandbox.run(&["analyze", file.to_str().unwrap(), "--strict"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to analyze"));
    assert!(stderr.contains("while awaiting serve zone"));
    assert!(!sandbox.path("analysis").exists());
}

#[test]
fn analyze_missing_file_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .args(["analyze", "nope.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read nope.txt"));
}

#[test]
fn analyze_parallel_matches_sequential() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("match.txt");
    let file = file.to_str().unwrap();

    sandbox.run(&["analyze", file, "--out", "seq"]);
    sandbox.run(&["analyze", file, "--out", "par", "--parallel"]);

    for name in ["serves.json", "setsK2.json", "hits.json", "breakpoints.json"] {
        assert_eq!(
            read_json(&sandbox, "seq", name),
            read_json(&sandbox, "par", name),
            "{} differs",
            name
        );
    }
}

// ============================================================================
// Summary Tests
// ============================================================================

#[test]
fn analyze_summary_prints_tables() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("practice.txt");
    let (stdout, stderr, exit_code) =
        sandbox.run(&["analyze", file.to_str().unwrap(), "--summary"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    insta::with_settings!({filters => vec![
        (r"generated \d{4}-\d{2}-\d{2} \d{2}:\d{2}", "generated [DATE]"),
    ]}, {
        insta::assert_snapshot!(stdout, @r"
practice.txt
generated [DATE]

Serves
player  total    ace   over    rec    err   ace%   err%
1           3      2      0      0      1  66.7%  33.3%

Receptions
(none)

Sets K1
(none)

Sets K2
(none)

Sets K1 after reception on 1
(none)

Attacks
(none)

Breakpoints
rot         0      1      2      3      4      5
+/-        +0     +0     +0     +1     +0     +0

server breaks
1           2
");
    });
}
