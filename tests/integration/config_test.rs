//! Integration tests for the config command (CLI)

use vbscout::Config;

use crate::helpers::Sandbox;

#[test]
fn config_path_honors_environment() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), sandbox.config_path().display().to_string());
}

#[test]
fn config_show_prints_defaults_without_file() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[notation]"));
    assert!(stdout.contains("separator = \">\""));
    assert!(stdout.contains("roll_back_failed_rallies = true"));
    assert!(stdout.contains("directory = \"analysis\""));

    let shown: Config = toml::from_str(&stdout).unwrap();
    assert_eq!(shown, Config::default());
}

#[test]
fn config_init_writes_defaults_once() {
    let sandbox = Sandbox::new();

    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "init"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Wrote default config"));
    assert_eq!(
        Config::load_from(&sandbox.config_path()).unwrap(),
        Config::default()
    );

    let (_stdout, stderr, exit_code) = sandbox.run(&["config", "init"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("already exists"));

    let (_stdout, _stderr, exit_code) = sandbox.run(&["config", "init", "--force"]);
    assert_eq!(exit_code, 0);
}

#[test]
fn config_show_reports_invalid_file() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[analysis]\nstrict = maybe\n");

    let (_stdout, stderr, exit_code) = sandbox.run(&["config", "show"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid config"));
}

#[test]
fn completions_are_generated() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("vbscout"));
    assert!(stdout.contains("analyze"));
}

#[test]
fn version_is_printed() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with(&format!("vbscout {}", env!("CARGO_PKG_VERSION"))));
}
