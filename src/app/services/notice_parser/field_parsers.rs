//! Line classification and field parsing helpers
//!
//! Small shared helpers used by the segmenter and the record field parser:
//! line-shape classifiers, identifier expansion, and dash normalization.
//! The input has no delimiters or grammar, so record and field boundaries
//! are inferred from these regex shapes alone.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// One or two integers, optionally hyphen-separated: `17` or `17-19`
static IDENTIFIER_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+ ?(?:- ?\d+)?$").expect("static regex must compile"));

/// A line opening with a date shape: `D/D` or `DD-DD/D`
static DURATION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,2}/\d{1,2}|\d{1,2}-\d{1,2}/\d{1,2})").expect("static regex must compile")
});

/// Trim a raw input line and normalize en-dash and em-dash to ASCII hyphen
pub fn normalize_line(line: &str) -> String {
    line.replace(['\u{2013}', '\u{2014}'], "-").trim().to_string()
}

/// Whether a line opens a new record group
pub fn is_identifier_line(line: &str) -> bool {
    IDENTIFIER_LINE_RE.is_match(line)
}

/// Whether a line belongs to the duration block of a record
pub fn is_duration_line(line: &str) -> bool {
    DURATION_LINE_RE.is_match(line)
}

/// Expand an identifier line into its ordered identifier set.
///
/// `N` yields `[N]`; `N-M` yields the inclusive range `[N, ..., M]`. A
/// descending range cannot form a valid set and fails loudly rather than
/// emitting nothing.
pub fn parse_ids(line: &str) -> Result<Vec<u32>> {
    let tokens: Vec<u32> = line
        .split('-')
        .map(|token| token.trim().parse::<u32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| Error::invalid_identifiers(line, e.to_string()))?;

    match tokens[..] {
        [id] => Ok(vec![id]),
        [first, last] if first <= last => Ok((first..=last).collect()),
        [first, last] => Err(Error::invalid_identifiers(
            line,
            format!("descending range {}-{}", first, last),
        )),
        _ => Err(Error::invalid_identifiers(line, "not an identifier range")),
    }
}
