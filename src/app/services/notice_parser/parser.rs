//! Parsing orchestration for a full text dump
//!
//! Drives the pipeline: segmenter, record field parser (which invokes the
//! duration parser), expander. No state survives beyond the current record
//! group apart from the accumulating output and statistics.

use tracing::debug;

use super::expander::expand_record;
use super::record_parser::parse_record_group;
use super::segmenter::segment_lines;
use super::stats::{ParseResult, ParseStats};
use crate::Result;
use crate::app::services::country_registry::CountryRegistry;

/// Parser for one pasted dump of the border-control table
#[derive(Debug, Clone)]
pub struct NoticeParser {
    registry: CountryRegistry,
    reference_year: i32,
}

impl NoticeParser {
    /// Create a parser resolving year-less dates against `reference_year`
    pub fn new(registry: CountryRegistry, reference_year: i32) -> Self {
        Self {
            registry,
            reference_year,
        }
    }

    /// Parse the complete input text into expanded records plus statistics.
    ///
    /// Fails on the first structural or duration-notation error; one bad
    /// record invalidates the whole document.
    pub fn parse_text(&self, text: &str) -> Result<ParseResult> {
        let mut stats = ParseStats {
            lines_total: text.lines().count(),
            ..ParseStats::default()
        };

        let groups = segment_lines(text.lines())?;
        stats.groups_segmented = groups.len();

        let mut records = Vec::new();
        for group in &groups {
            let data = parse_record_group(group, &self.registry, self.reference_year)?;
            stats.durations_parsed += data.durations.len();
            stats.durations_degraded += data
                .durations
                .iter()
                .filter(|duration| !duration.is_fully_resolved())
                .count();
            records.extend(expand_record(data));
        }
        stats.records_emitted = records.len();

        debug!(
            "Parsed {} records from {} groups ({} lines)",
            stats.records_emitted, stats.groups_segmented, stats.lines_total
        );

        Ok(ParseResult { records, stats })
    }
}
