//! Subcommand handlers.

pub mod analyze;
pub mod completions;
pub mod config;
pub mod preprocess;
pub mod validate;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use vbscout::preprocess::preprocess;
use vbscout::{Config, Transcript};

/// Read a transcript, applying the configured keybindings first.
pub fn load_transcript(path: &Path, config: &Config) -> Result<Transcript> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let text = preprocess(&text, &config.keybindings()?);
    Transcript::parse(&text).with_context(|| format!("Failed to parse {}", path.display()))
}
