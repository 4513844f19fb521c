//! Data models for Schengen notice processing
//!
//! This module contains the core data structures for representing border
//! control notices as they move through the pipeline: raw line groups,
//! intermediate per-group data, and the final expanded records.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Serialize, Serializer};

/// Ordered, trimmed text lines belonging to one record before parsing.
///
/// Created by the segmenter and consumed exactly once by the record field
/// parser; the first line is always an identifier line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecordGroup {
    pub lines: Vec<String>,
}

impl RawRecordGroup {
    pub fn new(first_line: String) -> Self {
        Self {
            lines: vec![first_line],
        }
    }

    /// The identifier line that opened this group
    pub fn ids_line(&self) -> &str {
        &self.lines[0]
    }
}

/// A country as printed in the table, with its resolved ISO code.
///
/// Unknown display names keep the printed name with an absent code; a lookup
/// miss is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: String,
    pub code: Option<String>,
}

/// One side of a duration: a timezone-aware instant when parsing succeeded,
/// or the untouched source fragment when the notation was not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeBound {
    Instant(DateTime<FixedOffset>),
    Raw(String),
}

impl TimeBound {
    pub fn is_instant(&self) -> bool {
        matches!(self, TimeBound::Instant(_))
    }
}

impl Serialize for TimeBound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TimeBound::Instant(instant) => serializer
                .serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Secs, false)),
            TimeBound::Raw(text) => serializer.serialize_str(text),
        }
    }
}

/// A (start, end) pair describing when a border-control measure was in force.
///
/// `raw` preserves the exact matched substring for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duration {
    pub raw: String,
    pub start: TimeBound,
    pub end: TimeBound,
}

impl Duration {
    /// Whether both sides resolved to instants
    pub fn is_fully_resolved(&self) -> bool {
        self.start.is_instant() && self.end.is_instant()
    }
}

/// Intermediate per-group data produced by the record field parser and
/// consumed by the expander
#[derive(Debug, Clone, PartialEq)]
pub struct RecordData {
    pub ids: Vec<u32>,
    pub country: Country,
    pub durations: Vec<Duration>,
    pub reason: String,
}

/// One fully expanded output record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: u32,
    pub country: Country,
    pub duration: Duration,
    pub reason: String,
}
