//! Schengen Processor Library
//!
//! A Rust library for converting the European Commission's table of temporary
//! Schengen border-control reintroductions, copy-pasted from the published PDF
//! as plain text, into structured JSON records.
//!
//! This library provides tools for:
//! - Segmenting the unstructured line stream into per-record groups
//! - Extracting identifier ranges, countries, durations, and reason text
//! - Resolving heterogeneous date/time notations into timezone-aware instants
//! - Expanding identifier ranges into one record per identifier
//! - Graceful degradation for notations the parser does not understand

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod country_registry;
        pub mod notice_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Country, Duration, Record, TimeBound};
pub use app::services::country_registry::CountryRegistry;
pub use app::services::notice_parser::{NoticeParser, ParseResult, ParseStats};

/// Result type alias for the Schengen processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Schengen notice processing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Content encountered before the first identifier line
    #[error("unexpected content before first identifier line: '{line}'")]
    UnexpectedContent { line: String },

    /// Record group ended before the country line
    #[error("record group '{ids_line}' is truncated: no country line follows")]
    TruncatedGroup { ids_line: String },

    /// Identifier line could not be expanded into a valid identifier set
    #[error("invalid identifier line '{line}': {message}")]
    InvalidIdentifiers { line: String, message: String },

    /// A duration text block yielded no recognized duration notation
    #[error("no durations found: '{text}'")]
    NoDurations { text: String },

    /// JSON serialization error
    #[error("JSON serialization error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an unexpected-content error
    pub fn unexpected_content(line: impl Into<String>) -> Self {
        Self::UnexpectedContent { line: line.into() }
    }

    /// Create a truncated-group error
    pub fn truncated_group(ids_line: impl Into<String>) -> Self {
        Self::TruncatedGroup {
            ids_line: ids_line.into(),
        }
    }

    /// Create an invalid-identifiers error
    pub fn invalid_identifiers(line: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidIdentifiers {
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create a no-durations error identifying the offending text
    pub fn no_durations(text: impl Into<String>) -> Self {
        Self::NoDurations { text: text.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
