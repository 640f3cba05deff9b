use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use super::{MatchReport, ReportSink};
use crate::lineup::SLOTS;
use crate::notation::codes::{Code, SetDestination};
use crate::stats::Sets;

/// Plain-text tables with counts and percentages per category.
pub struct SummarySink<W: Write> {
    out: W,
    title: Option<String>,
}

impl<W: Write> SummarySink<W> {
    pub fn new(out: W) -> Self {
        Self { out, title: None }
    }

    /// Print a title and the generation time above the tables.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for SummarySink<W> {
    fn name(&self) -> &'static str {
        "summary"
    }

    fn consume(&mut self, report: &MatchReport<'_>) -> Result<()> {
        if let Some(title) = &self.title {
            let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");
            writeln!(self.out, "{}\ngenerated {}\n", title, generated)
                .context("Failed to write summary")?;
        }
        self.out
            .write_all(render(report).as_bytes())
            .context("Failed to write summary")?;
        self.out.flush().context("Failed to write summary")?;
        debug!(sink = self.name(), "wrote report");
        Ok(())
    }
}

/// Render the summary tables.
pub fn render(report: &MatchReport<'_>) -> String {
    let stats = report.stats;
    let mut out = String::new();

    section(&mut out, "Serves");
    if stats.serves.by_player().is_empty() {
        out.push_str("(none)\n");
    } else {
        row(
            &mut out,
            "player",
            &["total", "ace", "over", "rec", "err", "ace%", "err%"],
        );
        for (player, _) in stats.serves.by_player().players() {
            let [ace, over, rec, err] = stats.serves.outcomes(player);
            let total = ace + over + rec + err;
            row(
                &mut out,
                &player.to_string(),
                &[
                    total.to_string(),
                    ace.to_string(),
                    over.to_string(),
                    rec.to_string(),
                    err.to_string(),
                    percent(ace as i64, total),
                    percent(err as i64, total),
                ],
            );
        }
    }

    section(&mut out, "Receptions");
    if stats.receptions.by_player().is_empty() {
        out.push_str("(none)\n");
    } else {
        row(
            &mut out,
            "player",
            &["total", "perf", "okay", "bad", "err", "pos%"],
        );
        for (player, _) in stats.receptions.by_player().players() {
            let [perfect, okay, bad, err] = stats.receptions.outcomes(player);
            let total = perfect + okay + bad + err;
            row(
                &mut out,
                &player.to_string(),
                &[
                    total.to_string(),
                    perfect.to_string(),
                    okay.to_string(),
                    bad.to_string(),
                    err.to_string(),
                    percent((perfect + okay) as i64, total),
                ],
            );
        }
    }

    sets_section(&mut out, "Sets K1", &stats.sets_k1);
    sets_section(&mut out, "Sets K2", &stats.sets_k2);
    sets_section(&mut out, "Sets K1 after reception on 1", &stats.sets_k1_pos1);

    section(&mut out, "Attacks");
    if stats.attacks.by_player().is_empty() {
        out.push_str("(none)\n");
    } else {
        row(
            &mut out,
            "player",
            &["total", "kill", "def", "bout", "blkd", "err", "eff%"],
        );
        for (player, _) in stats.attacks.by_player().players() {
            let [kill, defended, block_out, blocked, err] = stats.attacks.outcomes(player);
            let total = kill + defended + block_out + blocked + err;
            let efficiency = (kill + block_out) as i64 - (blocked + err) as i64;
            row(
                &mut out,
                &player.to_string(),
                &[
                    total.to_string(),
                    kill.to_string(),
                    defended.to_string(),
                    block_out.to_string(),
                    blocked.to_string(),
                    err.to_string(),
                    percent(efficiency, total),
                ],
            );
        }
    }

    section(&mut out, "Breakpoints");
    let rotations: Vec<String> = (0..SLOTS).map(|r| r.to_string()).collect();
    let balance: Vec<String> = (0..SLOTS)
        .map(|r| format!("{:+}", stats.breaks.rotation(r)))
        .collect();
    row(&mut out, "rot", &rotations);
    row(&mut out, "+/-", &balance);
    if !stats.breaks.players().is_empty() {
        out.push('\n');
        row(&mut out, "server", &["breaks"]);
        for (player, credits) in stats.breaks.players() {
            row(&mut out, &player.to_string(), &[credits.to_string()]);
        }
    }

    out
}

fn sets_section(out: &mut String, title: &str, sets: &Sets) {
    section(out, title);
    if sets.by_player().is_empty() {
        out.push_str("(none)\n");
        return;
    }

    let mut header = vec!["rot".to_string()];
    header.extend(SetDestination::ALL.iter().map(|d| d.code().to_string()));
    row(out, "setter", &header);

    for (setter, _) in sets.by_player().players() {
        for rotation in 0..SLOTS {
            let distribution = sets.distribution(setter, rotation);
            if distribution.iter().all(|(_, count)| *count == 0) {
                continue;
            }
            let mut cells = vec![rotation.to_string()];
            cells.extend(distribution.iter().map(|(_, count)| count.to_string()));
            row(out, &setter.to_string(), &cells);
        }
    }
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(title);
    out.push('\n');
}

fn row<S: AsRef<str>>(out: &mut String, label: &str, cells: &[S]) {
    let _ = write!(out, "{:<6}", label);
    for cell in cells {
        let _ = write!(out, "{:>7}", cell.as_ref());
    }
    out.push('\n');
}

fn percent(part: i64, total: u64) -> String {
    if total == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", 100.0 * part as f64 / total as f64)
}
