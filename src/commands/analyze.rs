//! Analyze command handler

use anyhow::{Context, Result};

use vbscout::cli::AnalyzeArgs;
use vbscout::stats::validate::attack_zone_consistency;
use vbscout::theme::current_theme;
use vbscout::{Analyzer, Config, JsonSink, ReportSink, SummarySink};

use super::load_transcript;

/// Decode the transcript, write the JSON report and optionally the summary.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: AnalyzeArgs) -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();

    let mut options = config.analysis_options()?;
    options.strict |= args.strict;
    options.parallel |= args.parallel;

    let transcript = load_transcript(&args.file, &config)?;
    let analysis = Analyzer::new(options)
        .analyze(&transcript)
        .with_context(|| format!("Failed to analyze {}", args.file.display()))?;
    let report = analysis.report(&transcript);

    let out = args.out.unwrap_or_else(|| config.output.directory.clone());
    let mut json = JsonSink::new(out);
    json.consume(&report)?;

    if args.summary {
        let title = args
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.file.display().to_string());
        SummarySink::new(std::io::stdout().lock())
            .with_title(title)
            .consume(&report)?;
    }

    for failure in &analysis.failures {
        eprintln!("{}", theme.error_text(&format!("error: {}", failure)));
    }
    for warning in &analysis.warnings {
        eprintln!("{}", theme.warning_text(&format!("warning: {}", warning)));
    }
    for issue in attack_zone_consistency(&analysis.stats.attacks) {
        eprintln!("{}", theme.warning_text(&format!("check: {}", issue)));
    }

    let rallies = format!(
        "{} rallies, {} failed, {} warnings",
        analysis.rallies,
        analysis.failures.len(),
        analysis.warnings.len()
    );
    if analysis.is_clean() {
        eprintln!("{}", theme.success_text(&rallies));
    } else {
        eprintln!("{}", theme.warning_text(&rallies));
    }
    eprintln!(
        "{}",
        theme.secondary_text(&format!(
            "Wrote {} files to {}",
            json.written().len(),
            json.dir().display()
        ))
    );
    Ok(())
}
