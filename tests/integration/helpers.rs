//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding the transcript fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Load a fixture as a string.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// A scratch directory with its own config file location.
///
/// Commands run inside the directory with `VBSCOUT_CONFIG` pointing at
/// `config.toml` in it, so the user's config is never touched.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn config_path(&self) -> PathBuf {
        self.path("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Copy a fixture into the sandbox and return its path.
    pub fn fixture(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, load_fixture(name)).expect("Failed to copy fixture");
        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("vbscout").expect("vbscout binary");
        cmd.current_dir(self.dir.path())
            .env("NO_COLOR", "1")
            .env("VBSCOUT_CONFIG", self.config_path())
            .env_remove("VBSCOUT_LOG");
        cmd
    }

    /// Run vbscout and capture (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to execute vbscout");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }
}
