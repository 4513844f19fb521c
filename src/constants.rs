//! Application constants for the Schengen processor
//!
//! This module contains the document layout constants and the static
//! reference tables (country codes, timezones) used throughout the
//! application. The tables are plain data: extending them does not touch
//! parser logic.

use chrono_tz::Tz;

// =============================================================================
// Document Layout
// =============================================================================

/// Number of leading boilerplate lines in the published document (title,
/// column headings, legal preamble) that carry no record data
pub const HEADER_LINE_COUNT: usize = 11;

/// Running page header repeated through the dump
pub const RUNNING_HEADER_PREFIX: &str = "EN";

/// Footnote marker appended after the table body
pub const FOOTNOTE_PREFIX: &str = "* In line with the Schengen Borders Code";

// =============================================================================
// Country Reference Data
// =============================================================================

/// Display name (as printed in the Commission's table) to ISO-3166-1 alpha-2
/// code. The table prints both "Czech Republic" and "Czechia" depending on
/// the edition.
pub const ISO_COUNTRY_CODES: &[(&str, &str)] = &[
    ("Austria", "AT"),
    ("Belgium", "BE"),
    ("Czech Republic", "CZ"),
    ("Czechia", "CZ"),
    ("Denmark", "DK"),
    ("Estonia", "EE"),
    ("Finland", "FI"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("Hungary", "HU"),
    ("Iceland", "IS"),
    ("Italy", "IT"),
    ("Latvia", "LV"),
    ("Lithuania", "LT"),
    ("Malta", "MT"),
    ("Netherlands", "NL"),
    ("Norway", "NO"),
    ("Poland", "PL"),
    ("Portugal", "PT"),
    ("Slovakia", "SK"),
    ("Slovenia", "SI"),
    ("Spain", "ES"),
    ("Sweden", "SE"),
    ("Switzerland", "CH"),
];

/// ISO country code to the IANA timezone the notified controls are expressed
/// in. Countries spanning several zones use the zone of the capital.
pub const COUNTRY_TIMEZONES: &[(&str, Tz)] = &[
    ("AT", Tz::Europe__Vienna),
    ("BE", Tz::Europe__Brussels),
    ("CZ", Tz::Europe__Prague),
    ("DK", Tz::Europe__Copenhagen),
    ("EE", Tz::Europe__Tallinn),
    ("FI", Tz::Europe__Helsinki),
    ("FR", Tz::Europe__Paris),
    ("DE", Tz::Europe__Berlin),
    ("HU", Tz::Europe__Budapest),
    ("IS", Tz::Atlantic__Reykjavik),
    ("IT", Tz::Europe__Rome),
    ("LV", Tz::Europe__Riga),
    ("LT", Tz::Europe__Vilnius),
    ("MT", Tz::Europe__Malta),
    ("NL", Tz::Europe__Amsterdam),
    ("NO", Tz::Europe__Oslo),
    ("PL", Tz::Europe__Warsaw),
    ("PT", Tz::Europe__Lisbon),
    ("SK", Tz::Europe__Bratislava),
    ("SI", Tz::Europe__Ljubljana),
    ("ES", Tz::Europe__Madrid),
    ("SE", Tz::Europe__Stockholm),
    ("CH", Tz::Europe__Zurich),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_country_code_has_a_timezone() {
        for (name, code) in ISO_COUNTRY_CODES {
            assert!(
                COUNTRY_TIMEZONES.iter().any(|(c, _)| c == code),
                "no timezone mapped for {} ({})",
                name,
                code
            );
        }
    }

    #[test]
    fn test_tables_have_no_duplicate_names() {
        let mut names: Vec<&str> = ISO_COUNTRY_CODES.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ISO_COUNTRY_CODES.len());
    }
}
