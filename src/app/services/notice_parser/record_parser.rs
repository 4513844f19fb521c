//! Record field extraction from one line group
//!
//! Within a segmented group the fields have fixed positions: the identifier
//! line, the country line, then a run of duration-shaped lines, then the
//! free-text reason. The sub-parsers run in that order; the duration run is
//! consumed greedily and stops at the first non-matching line.

use super::duration_parser::DurationParser;
use super::field_parsers::{is_duration_line, parse_ids};
use crate::app::models::{RawRecordGroup, RecordData};
use crate::app::services::country_registry::CountryRegistry;
use crate::{Error, Result};

/// Parse one record group into its intermediate fields
pub fn parse_record_group(
    group: &RawRecordGroup,
    registry: &CountryRegistry,
    reference_year: i32,
) -> Result<RecordData> {
    let ids = parse_ids(group.ids_line())?;

    let country_name = group
        .lines
        .get(1)
        .ok_or_else(|| Error::truncated_group(group.ids_line()))?;
    let country = registry.country(country_name);

    let mut index = 2;
    let mut duration_lines: Vec<String> = Vec::new();
    while let Some(line) = group.lines.get(index) {
        if !is_duration_line(line) {
            break;
        }
        duration_lines.push(line.clone());
        index += 1;
    }

    let duration_parser = DurationParser::new(
        registry.timezone(country.code.as_deref()),
        reference_year,
    );
    let durations = duration_parser.parse(&duration_lines)?;

    let reason = group.lines[index..].join("\n");

    Ok(RecordData {
        ids,
        country,
        durations,
        reason,
    })
}
