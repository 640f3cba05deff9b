//! vbscout - volleyball scouting notation parser
//!
//! Decodes rally transcripts written in run-length scouting notation and
//! tallies serve, reception, set, attack and breakpoint statistics.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod lineup;
pub mod notation;
pub mod preprocess;
pub mod rally;
pub mod report;
pub mod stats;
pub mod theme;

pub use analysis::{Analysis, AnalysisOptions, Analyzer};
pub use config::Config;
pub use lineup::{Lineup, PlayerId};
pub use notation::{DecodeError, Transcript};
pub use report::{JsonSink, MatchReport, ReportSink, SummarySink};
pub use stats::Stats;
