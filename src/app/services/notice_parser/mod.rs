//! Parser for pasted Schengen border-control PDF dumps
//!
//! This module turns the unstructured line stream of the Commission's table
//! into structured records. The input has no explicit delimiters or grammar:
//! record boundaries and sub-fields are inferred from positional and regex
//! heuristics, and the small fixed vocabulary of date notations is handled
//! by an ordered list of patterns rather than a formal parser.
//!
//! ## Architecture
//!
//! - [`parser`] - Parsing orchestration over a full dump
//! - [`segmenter`] - Noise discarding and identifier-anchored grouping
//! - [`record_parser`] - Per-group field extraction
//! - [`duration_parser`] - Date/time notation resolution to instants
//! - [`expander`] - Identifier-range expansion into output records
//! - [`field_parsers`] - Shared line classifiers and identifier parsing
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use schengen_processor::{CountryRegistry, NoticeParser};
//!
//! # fn example(text: &str) -> schengen_processor::Result<()> {
//! let parser = NoticeParser::new(CountryRegistry::new(), 2024);
//! let result = parser.parse_text(text)?;
//!
//! println!(
//!     "Parsed {} records from {} groups",
//!     result.stats.records_emitted, result.stats.groups_segmented
//! );
//! # Ok(())
//! # }
//! ```

pub mod duration_parser;
pub mod expander;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod segmenter;
pub mod stats;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use duration_parser::DurationParser;
pub use parser::NoticeParser;
pub use stats::{ParseResult, ParseStats};
