//! Line segmentation for the pasted PDF dump
//!
//! Splits the raw input line stream into per-record line groups. The dump has
//! no explicit delimiters: a group starts at each identifier-shaped line and
//! runs until the next one. Document boilerplate, running page headers, and
//! the trailing footnote are discarded before grouping.

use tracing::debug;

use super::field_parsers::{is_identifier_line, normalize_line};
use crate::app::models::RawRecordGroup;
use crate::constants::{FOOTNOTE_PREFIX, HEADER_LINE_COUNT, RUNNING_HEADER_PREFIX};
use crate::{Error, Result};

/// Segment the full ordered line stream into record groups.
///
/// Every surviving line must belong to a group; a content line (blank lines
/// included) arriving before the first identifier line means the document
/// shape changed, and the run fails rather than silently dropping data.
pub fn segment_lines<'a, I>(lines: I) -> Result<Vec<RawRecordGroup>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<RawRecordGroup> = Vec::new();

    for (index, raw_line) in lines.into_iter().enumerate() {
        // The first 11 lines are the document title and column headings
        if index < HEADER_LINE_COUNT {
            continue;
        }

        let line = normalize_line(raw_line);

        if line.starts_with(RUNNING_HEADER_PREFIX) || line.starts_with(FOOTNOTE_PREFIX) {
            continue;
        }

        if is_identifier_line(&line) {
            groups.push(RawRecordGroup::new(line));
            continue;
        }

        match groups.last_mut() {
            Some(group) => group.lines.push(line),
            None => return Err(Error::unexpected_content(line)),
        }
    }

    debug!("Segmented input into {} record groups", groups.len());

    Ok(groups)
}
