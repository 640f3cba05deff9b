//! Report sinks.
//!
//! Sinks receive the finished aggregators as read-only data and decide how to
//! present them. The analysis itself never formats anything.

mod json;
mod summary;

use std::collections::BTreeMap;

use crate::lineup::PlayerId;
use crate::notation::codes::ServeType;
use crate::stats::Stats;

pub use json::JsonSink;
pub use summary::SummarySink;

/// Everything a sink gets to see after a run.
#[derive(Debug, Clone, Copy)]
pub struct MatchReport<'a> {
    pub stats: &'a Stats,
    pub serve_positions: &'a BTreeMap<PlayerId, u8>,
    pub serve_types: &'a BTreeMap<PlayerId, ServeType>,
}

/// Consumer of a finished analysis.
pub trait ReportSink {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Hand the report to the sink.
    fn consume(&mut self, report: &MatchReport<'_>) -> anyhow::Result<()>;
}
