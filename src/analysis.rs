//! Transcript analysis pipeline.
//!
//! Every rally line is decoded on its own into a buffer of events. A rally
//! only reaches the aggregators once it decoded completely, unless rollback is
//! switched off. Rallies are independent, so they can be decoded on the rayon
//! pool; per-rally tallies are merged back in rally order.

use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::notation::codes::ServeType;
use crate::notation::{DecodeError, RallyLine, Syntax, Transcript};
use crate::rally::{decode_rally, RallyContext, RallyOutcome, RallyWarning, WarningKind};
use crate::report::MatchReport;
use crate::stats::Stats;

/// Knobs of an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub syntax: Syntax,
    /// Serve type assumed for servers missing from the serve-type table.
    pub default_serve_type: ServeType,
    /// Fail on the first rally that does not decode.
    pub strict: bool,
    pub parallel: bool,
    /// Drop every event of a rally that failed to decode.
    pub roll_back_failed_rallies: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            syntax: Syntax::default(),
            default_serve_type: ServeType::Float,
            strict: false,
            parallel: false,
            roll_back_failed_rallies: true,
        }
    }
}

/// Result of analyzing a transcript.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub stats: Stats,
    pub warnings: Vec<RallyWarning>,
    pub failures: Vec<DecodeError>,
    /// Number of rally lines seen.
    pub rallies: usize,
}

impl Analysis {
    /// Report view pairing the tallies with the transcript's metadata.
    pub fn report<'a>(&'a self, transcript: &'a Transcript) -> MatchReport<'a> {
        MatchReport {
            stats: &self.stats,
            serve_positions: &transcript.serve_positions,
            serve_types: &transcript.serve_types,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Analyzer {
    options: AnalysisOptions,
}

impl Analyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// Decode every rally and fold the successful ones into the aggregators.
    ///
    /// In strict mode the first failing rally (in transcript order) is
    /// returned as the error.
    pub fn analyze(&self, transcript: &Transcript) -> Result<Analysis, DecodeError> {
        let ctx = RallyContext {
            syntax: self.options.syntax,
            serve_types: &transcript.serve_types,
            default_serve_type: self.options.default_serve_type,
        };

        let tallied: Vec<(RallyOutcome, Stats)> = if self.options.parallel {
            transcript
                .rallies
                .par_iter()
                .map(|line| self.tally(line, &ctx))
                .collect()
        } else {
            transcript
                .rallies
                .iter()
                .map(|line| self.tally(line, &ctx))
                .collect()
        };

        let mut analysis = Analysis {
            rallies: transcript.rallies.len(),
            ..Analysis::default()
        };
        let mut reported_servers = BTreeSet::new();

        for (outcome, stats) in tallied {
            analysis.stats.merge(&stats);

            for warning in outcome.warnings {
                if let WarningKind::UnknownServeType { player, .. } = warning.kind {
                    if !reported_servers.insert(player) {
                        continue;
                    }
                }
                debug!("{}", warning);
                analysis.warnings.push(warning);
            }

            if let Err(error) = outcome.result {
                if self.options.strict {
                    return Err(error);
                }
                debug!("{}", error);
                analysis.failures.push(error);
            }
        }

        info!(
            rallies = analysis.rallies,
            failures = analysis.failures.len(),
            warnings = analysis.warnings.len(),
            "analysis finished"
        );
        Ok(analysis)
    }

    fn tally(&self, line: &RallyLine, ctx: &RallyContext<'_>) -> (RallyOutcome, Stats) {
        let outcome = decode_rally(line, ctx);
        let mut stats = Stats::default();
        if outcome.is_ok() || !self.options.roll_back_failed_rallies {
            stats.record_all(&outcome.events);
        }
        (outcome, stats)
    }
}
