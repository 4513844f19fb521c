//! Integration tests for the full dump-to-JSON pipeline
//!
//! These tests drive the public API end to end with a realistic pasted dump:
//! boilerplate header, running page headers, footnotes, identifier ranges,
//! mixed duration notations, and an unknown country.

use std::io::Write;

use schengen_processor::cli::commands::{read_input, write_records};
use schengen_processor::{CountryRegistry, Error, NoticeParser};

/// Eleven lines of document boilerplate followed by the table body
fn dump(body: &str) -> String {
    format!(
        "MEMBER STATES' NOTIFICATIONS OF THE TEMPORARY\n\
         REINTRODUCTION OF BORDER CONTROL AT INTERNAL BORDERS\n\
         PURSUANT TO ARTICLE 25 AND 28 ET SEQ.\n\
         OF THE SCHENGEN BORDERS CODE\n\
         \n\
         No\n\
         Member State\n\
         Duration\n\
         Reasons\n\
         \n\
         Scope\n\
         {}",
        body
    )
}

fn parse(body: &str) -> schengen_processor::ParseResult {
    NoticeParser::new(CountryRegistry::new(), 2024)
        .parse_text(&dump(body))
        .expect("dump should parse")
}

#[test]
fn test_full_dump_produces_expected_records() {
    let result = parse(
        "11\n\
         Germany\n\
         01/01-15/01\n\
         Terrorist threat,\n\
         land borders\n\
         EN 4\n\
         12-14\n\
         France\n\
         01/02-15/02; 01/03-15/03;\n\
         01/04-15/04\n\
         Olympic and Paralympic games\n\
         19\n\
         Finland\n\
         01/01/2024, 19h - 20:00\n\
         State visit\n\
         * In line with the Schengen Borders Code, art. 25\n",
    );

    let json = serde_json::to_value(&result.records).unwrap();
    let records = json.as_array().unwrap();

    assert_eq!(records.len(), 5);

    // Single-identifier record
    assert_eq!(records[0]["id"], 11);
    assert_eq!(records[0]["country"]["name"], "Germany");
    assert_eq!(records[0]["country"]["code"], "DE");
    assert_eq!(records[0]["duration"]["raw"], "01/01-15/01");
    assert_eq!(records[0]["duration"]["start"], "2024-01-01T00:00:00+01:00");
    assert_eq!(records[0]["duration"]["end"], "2024-01-15T00:00:00+01:00");
    assert_eq!(records[0]["reason"], "Terrorist threat,\nland borders");

    // Identifier range expanded positionally, one duration each
    assert_eq!(records[1]["id"], 12);
    assert_eq!(records[1]["duration"]["raw"], "01/02-15/02");
    assert_eq!(records[2]["id"], 13);
    assert_eq!(records[2]["duration"]["raw"], "01/03-15/03");
    assert_eq!(records[3]["id"], 14);
    assert_eq!(records[3]["duration"]["raw"], "01/04-15/04");
    // April is summer time in France
    assert_eq!(records[3]["duration"]["start"], "2024-04-01T00:00:00+02:00");
    for record in &records[1..4] {
        assert_eq!(record["country"]["code"], "FR");
        assert_eq!(record["reason"], "Olympic and Paralympic games");
    }

    // Same-day time range in Finland's zone
    assert_eq!(records[4]["id"], 19);
    assert_eq!(records[4]["duration"]["start"], "2024-01-01T19:00:00+02:00");
    assert_eq!(records[4]["duration"]["end"], "2024-01-01T20:00:00+02:00");

    assert_eq!(result.stats.groups_segmented, 3);
    assert_eq!(result.stats.records_emitted, 5);
    assert_eq!(result.stats.durations_parsed, 5);
    assert_eq!(result.stats.durations_degraded, 0);
}

#[test]
fn test_unknown_country_propagates_null_code_in_utc() {
    let result = parse(
        "21-22\n\
         Ruritania\n\
         01/06-05/06; 10/06-15/06\n\
         Fictional summit\n",
    );

    let json = serde_json::to_value(&result.records).unwrap();
    let records = json.as_array().unwrap();

    assert_eq!(records.len(), 2);
    for record in records {
        assert_eq!(record["country"]["name"], "Ruritania");
        assert_eq!(record["country"]["code"], serde_json::Value::Null);
    }
    assert_eq!(records[0]["duration"]["start"], "2024-06-01T00:00:00+00:00");
}

#[test]
fn test_degraded_duration_keeps_raw_text_in_output() {
    // Day 31 does not exist in April; the start side stays raw
    let result = parse(
        "31\n\
         Germany\n\
         31-15/04/2024\n\
         Summit\n",
    );

    let json = serde_json::to_value(&result.records).unwrap();
    assert_eq!(json[0]["duration"]["start"], "31");
    assert_eq!(json[0]["duration"]["end"], "2024-04-15T00:00:00+02:00");
    assert_eq!(result.stats.durations_degraded, 1);
}

#[test]
fn test_unrecognized_duration_block_aborts_the_run() {
    let error = NoticeParser::new(CountryRegistry::new(), 2024)
        .parse_text(&dump("11\nGermany\n99/99 ???\nReason\n"))
        .unwrap_err();

    match error {
        Error::NoDurations { text } => assert_eq!(text, "99/99 ???"),
        other => panic!("expected NoDurations, got {:?}", other),
    }
}

#[test]
fn test_content_before_first_identifier_aborts_the_run() {
    let error = NoticeParser::new(CountryRegistry::new(), 2024)
        .parse_text(&dump("Germany\n01/01-15/01\nReason\n"))
        .unwrap_err();

    assert!(matches!(error, Error::UnexpectedContent { .. }));
}

#[test]
fn test_output_is_a_pretty_printed_array_with_trailing_newline() {
    let result = parse("11\nGermany\n01/01-15/01\nReason\n");

    let mut buffer = Vec::new();
    write_records(&mut buffer, &result.records).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert!(output.starts_with("[\n  {\n    \"id\": 11,"));
    assert!(output.ends_with("]\n"));

    // The pretty form round-trips to the same records
    let reparsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(reparsed, serde_json::to_value(&result.records).unwrap());
}

#[test]
fn test_input_can_be_read_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let text = dump("11\nGermany\n01/01-15/01\nReason\n");
    file.write_all(text.as_bytes()).unwrap();

    let read_back = read_input(Some(file.path())).unwrap();
    assert_eq!(read_back, text);
}

#[test]
fn test_missing_input_file_is_an_io_error() {
    let error = read_input(Some(std::path::Path::new("/nonexistent/dump.txt"))).unwrap_err();
    assert!(matches!(error, Error::Io { .. }));
}
