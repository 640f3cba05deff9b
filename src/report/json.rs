use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use super::{MatchReport, ReportSink};

/// Writes one pretty-printed JSON file per category into a directory.
#[derive(Debug)]
pub struct JsonSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written by the last `consume`.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write<T: Serialize + ?Sized>(&mut self, file: &str, value: &T) -> Result<()> {
        let path = self.dir.join(file);
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {}", file))?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        self.written.push(path);
        Ok(())
    }
}

impl ReportSink for JsonSink {
    fn name(&self) -> &'static str {
        "json"
    }

    fn consume(&mut self, report: &MatchReport<'_>) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        self.written.clear();

        let stats = report.stats;
        self.write("serves.json", &stats.serves)?;
        self.write("receptions.json", &stats.receptions)?;
        self.write("setsK1.json", &stats.sets_k1)?;
        self.write("setsK2.json", &stats.sets_k2)?;
        self.write("setsK1_pos1.json", &stats.sets_k1_pos1)?;
        self.write("hits.json", &stats.attacks)?;
        self.write("breakpoints.json", stats.breaks.by_rotation())?;
        self.write("breakpoints_players.json", stats.breaks.players())?;
        self.write("serve_positions.json", report.serve_positions)?;
        self.write("serve_types.json", report.serve_types)?;

        info!(
            sink = self.name(),
            dir = %self.dir.display(),
            files = self.written.len(),
            "wrote report"
        );
        Ok(())
    }
}
