//! Test utilities shared across the notice parser test modules

use chrono::{DateTime, FixedOffset, TimeZone};
use chrono_tz::Tz;

use super::duration_parser::DurationParser;


/// Duration parser pinned to Germany's zone and a fixed year context
pub fn berlin_parser() -> DurationParser {
    DurationParser::new(Tz::Europe__Berlin, 2024)
}

pub fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Expected instant in a zone, converted the way the parser emits it
pub fn instant(
    tz: Tz,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> DateTime<FixedOffset> {
    tz.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
        .fixed_offset()
}

/// A record dump prefixed with the 11 boilerplate lines the segmenter skips
pub fn with_boilerplate(body: &[&str]) -> String {
    let mut all_lines = vec![
        "MEMBER STATES' NOTIFICATIONS OF THE TEMPORARY",
        "REINTRODUCTION OF BORDER CONTROL AT INTERNAL BORDERS",
        "PURSUANT TO ARTICLE 25 AND 28 ET SEQ.",
        "OF THE SCHENGEN BORDERS CODE",
        "",
        "No",
        "Member State",
        "Duration",
        "Reasons",
        "",
        "Scope",
    ];
    all_lines.extend_from_slice(body);
    all_lines.join("\n")
}
