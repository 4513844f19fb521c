//! Command implementation for the Schengen processor CLI
//!
//! Wires the pipeline to the process boundary: logging setup, input
//! acquisition (stdin or file), parsing, and JSON output on stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::app::models::Record;
use crate::cli::args::Args;
use crate::{CountryRegistry, Error, NoticeParser, Result};

/// Run the processor: read the dump, parse it, write the JSON array
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    let text = read_input(args.input_path.as_deref())?;
    debug!("Read {} bytes of input", text.len());

    let parser = NoticeParser::new(CountryRegistry::new(), args.get_reference_year());
    let result = parser.parse_text(&text)?;

    write_records(io::stdout().lock(), &result.records)?;

    info!(
        "Emitted {} records from {} groups; {}/{} durations fully resolved",
        result.stats.records_emitted,
        result.stats.groups_segmented,
        result.stats.durations_parsed - result.stats.durations_degraded,
        result.stats.durations_parsed,
    );

    Ok(())
}

/// Read the full dump from a file, or from stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read input file '{}'", path.display()), e)
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| Error::io("Failed to read standard input", e))?;
            Ok(text)
        }
    }
}

/// Write the records as a pretty-printed JSON array with a trailing newline
pub fn write_records<W: Write>(mut writer: W, records: &[Record]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer).map_err(|e| Error::io("Failed to write output", e))?;
    Ok(())
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("schengen_processor={}", args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}
