//! Integration tests for keybinding preprocessing (CLI)

use std::fs;

use crate::helpers::Sandbox;

const BINDINGS: &str = "[keybindings]\nj = \".\"\ns = \" \"\n";

#[test]
fn preprocess_prints_rewritten_transcript() {
    let sandbox = Sandbox::new();
    sandbox.write_config(BINDINGS);
    let file = sandbox.fixture("keyed.txt");

    let (stdout, _stderr, exit_code) = sandbox.run(&["preprocess", file.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "# typed with display keys\n>  1 1\n>>  1 J\n1 2 3 4 5 6 4 9 > . . .\n"
    );
}

#[test]
fn preprocess_in_place_overwrites_input() {
    let sandbox = Sandbox::new();
    sandbox.write_config(BINDINGS);
    let file = sandbox.fixture("keyed.txt");

    let (_stdout, stderr, exit_code) =
        sandbox.run(&["preprocess", file.to_str().unwrap(), "--in-place"]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("Rewrote 1 lines"));
    let content = fs::read_to_string(&file).unwrap();
    assert!(content.ends_with("1 2 3 4 5 6 4 9 > . . .\n"));
    assert!(!content.contains('!'));
}

#[test]
fn preprocess_to_output_file_keeps_input() {
    let sandbox = Sandbox::new();
    sandbox.write_config(BINDINGS);
    let file = sandbox.fixture("keyed.txt");
    let out = sandbox.path("clean.txt");

    let (_stdout, _stderr, exit_code) = sandbox.run(&[
        "preprocess",
        file.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 0);
    assert!(fs::read_to_string(&file).unwrap().contains("!1 2 3"));
    assert!(fs::read_to_string(&out).unwrap().contains("> . . ."));
}

#[test]
fn preprocess_in_place_and_output_conflict() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("keyed.txt");

    let (_stdout, stderr, exit_code) = sandbox.run(&[
        "preprocess",
        file.to_str().unwrap(),
        "--in-place",
        "--output",
        "x.txt",
    ]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn analyze_applies_keybindings() {
    let sandbox = Sandbox::new();
    sandbox.write_config(BINDINGS);
    let file = sandbox.fixture("keyed.txt");

    let (stdout, _stderr, exit_code) = sandbox.run(&["validate", file.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("1 rallies, 0 failed"));
}

#[test]
fn invalid_keybinding_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[keybindings]\njj = \".\"\n");
    let file = sandbox.fixture("keyed.txt");

    let (_stdout, stderr, exit_code) = sandbox.run(&["preprocess", file.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Keybinding 'jj'"));
}
