//! Parsing statistics and result structures

use serde::Serialize;

use crate::app::models::Record;

/// Statistics collected over one parsing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Raw input lines, boilerplate included
    pub lines_total: usize,
    /// Record groups found by the segmenter
    pub groups_segmented: usize,
    /// Records emitted after identifier-range expansion
    pub records_emitted: usize,
    /// Durations extracted across all groups
    pub durations_parsed: usize,
    /// Durations where at least one side kept its raw text
    pub durations_degraded: usize,
}

impl ParseStats {
    /// Share of durations fully resolved to instants (1.0 when none parsed)
    pub fn resolution_rate(&self) -> f64 {
        if self.durations_parsed == 0 {
            return 1.0;
        }
        (self.durations_parsed - self.durations_degraded) as f64 / self.durations_parsed as f64
    }
}

/// Complete result of parsing one dump
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub records: Vec<Record>,
    pub stats: ParseStats,
}
