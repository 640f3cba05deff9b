//! Integration tests for the validate command (CLI)

use predicates::prelude::*;

use crate::helpers::Sandbox;

#[test]
fn validate_clean_transcript_exits_0() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("practice.txt");

    sandbox
        .command()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 rallies, 0 failed, 0 warnings"));

    // validate never writes reports
    assert!(!sandbox.path("analysis").exists());
}

#[test]
fn validate_lists_every_failure() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("broken.txt");
    let (stdout, _stderr, exit_code) = sandbox.run(&["validate", file.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stdout.contains(
        "error: rally 2, token 3 '...........' while awaiting serve zone: \
         value 11 is out of range, expected 1..10"
    ));
    assert!(stdout.contains(
        "error: rally 3, header '1 2 3 4 5 6 9': lineup header needs 8 numbers"
    ));
    assert!(stdout.contains("got 7"));
    assert!(stdout.contains("3 rallies, 2 failed, 0 warnings"));
}

#[test]
fn validate_reports_unknown_serve_type_once() {
    let sandbox = Sandbox::new();
    let file = sandbox.path("untyped.txt");
    std::fs::write(
        &file,
        "1 2 3 4 5 6 4 9 > . . .\n1 2 3 4 5 6 4 9 > . . .\n",
    )
    .unwrap();

    let (stdout, stderr, exit_code) = sandbox.run(&["validate", file.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(!stderr.contains("no serve type listed"), "stderr: {}", stderr);
    assert_eq!(
        stdout
            .matches("no serve type listed for player 1, assuming float")
            .count(),
        1
    );
    assert!(stdout.contains("2 rallies, 0 failed, 1 warnings"));
}

#[test]
fn validate_rejects_malformed_metadata() {
    let sandbox = Sandbox::new();
    let file = sandbox.path("bad.txt");
    std::fs::write(&file, ">  1 7\n").unwrap();

    sandbox
        .command()
        .arg("validate")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"))
        .stderr(predicate::str::contains("serve position '7'"));
}
