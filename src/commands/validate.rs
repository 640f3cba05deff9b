//! Validate command handler

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use vbscout::stats::validate::attack_zone_consistency;
use vbscout::theme::current_theme;
use vbscout::{Analyzer, Config};

use super::load_transcript;

/// Decode every rally and list failures and warnings.
///
/// Exits with 1 when any rally failed to decode.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path) -> Result<ExitCode> {
    let config = Config::load()?;
    let theme = current_theme();

    let mut options = config.analysis_options()?;
    options.strict = false;

    let transcript = load_transcript(file, &config)?;
    let analysis = Analyzer::new(options).analyze(&transcript)?;

    for failure in &analysis.failures {
        println!("{}", theme.error_text(&format!("error: {}", failure)));
    }
    for warning in &analysis.warnings {
        println!("{}", theme.warning_text(&format!("warning: {}", warning)));
    }
    for issue in attack_zone_consistency(&analysis.stats.attacks) {
        println!("{}", theme.warning_text(&format!("check: {}", issue)));
    }

    let summary = format!(
        "{} rallies, {} failed, {} warnings",
        analysis.rallies,
        analysis.failures.len(),
        analysis.warnings.len()
    );
    if analysis.is_clean() {
        println!("{}", theme.success_text(&summary));
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}", theme.error_text(&summary));
        Ok(ExitCode::FAILURE)
    }
}
