//! Command-line argument definitions for the Schengen processor
//!
//! This module defines the CLI interface using the clap derive API. The tool
//! is single-purpose: it reads one pasted dump and writes one JSON document,
//! so there are no subcommands.

use chrono::{Datelike, Utc};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the Schengen border-control notice processor
///
/// Converts the European Commission's table of temporary Schengen
/// border-control reintroductions, pasted from the published PDF as plain
/// text, into a structured JSON array.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "schengen-processor",
    version,
    about = "Convert pasted Schengen border-control PDF dumps to structured JSON",
    long_about = "Reads the plain-text dump of the European Commission's table of temporary \
                  reintroductions of border control (copy-pasted from the published PDF) on \
                  standard input and writes a JSON array of structured records to standard \
                  output: one record per notice identifier, with the country, the normalized \
                  control period, and the published justification."
)]
pub struct Args {
    /// Input path to a saved dump file
    ///
    /// If not specified, the dump is read from standard input.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Read the text dump from a file instead of standard input"
    )]
    pub input_path: Option<PathBuf>,

    /// Reference year for dates that omit one
    ///
    /// The published table omits the year on rows within the current
    /// edition's year. If not specified, the current UTC year is used.
    #[arg(
        short = 'y',
        long = "year",
        value_name = "YEAR",
        help = "Year applied to dates that omit one (defaults to the current year)"
    )]
    pub reference_year: Option<i32>,

    /// Enable verbose (debug-level) logging on stderr
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Reference year to resolve year-less dates against
    pub fn get_reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Utc::now().year())
    }
}
