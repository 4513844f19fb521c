//! Duration notation parsing and instant resolution
//!
//! Converts the raw duration lines of one record into normalized
//! (start, end) pairs. The published table mixes several notations: day-only
//! and day/month sides that inherit the rest of the date from the other end
//! of the range, two- and four-digit years, bare-hour and hour:minute times,
//! and cross-day ranges. The notations overlap in character classes, so they
//! are matched by an ordered list of patterns, first match winning per
//! scanned region, rather than a formal grammar.
//!
//! A side whose notation is not recognized keeps its raw text instead of an
//! instant. Only a block yielding no durations at all is an error: that
//! means an input shape the parser has never seen, which must surface
//! instead of being suppressed.

use std::sync::LazyLock;

use chrono::{Datelike, Days, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use regex::Regex;
use tracing::{debug, warn};

use crate::app::models::{Duration, TimeBound};
use crate::{Error, Result};

static DASH_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*").expect("static regex must compile"));

static SLASH_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*/\s*").expect("static regex must compile"));

/// Whole-block single full date: a record in force for exactly one day
static SINGLE_DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("static regex must compile"));

/// Date range: each side `D`, `D/M`, or `D/M/Y` with a 2- or 4-digit year,
/// optional trailing slash on the start, `-` before the end year tolerated
static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<start>\d{1,2}(?:/\d{1,2})?(?:/\d{2,4})?/?)-(?P<end>(?:\d{1,2}/)?\d{1,2}(?:[/-]\d{2,4})?)",
    )
    .expect("static regex must compile")
});

/// Same-day time range: full date with a bare hour, ending at hour:minute
static DAY_TIME_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<start>\d{2}/\d{2}/\d{4}, \d{1,2}h)-(?P<end>\d{1,2}:\d{2})")
        .expect("static regex must compile")
});

/// Cross-day time range: both sides fully qualified, double-hyphen separator
static CROSS_DAY_TIME_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<start>\d{2}/\d{2}/\d{4}, \d{1,2}h\d{2})--(?P<end>\d{2}/\d{2}/\d{4}, \d{1,2}h\d{2})")
        .expect("static regex must compile")
});

/// Parser for the duration block of one record, bound to the record's
/// country timezone and the document's year context
#[derive(Debug, Clone)]
pub struct DurationParser {
    timezone: Tz,
    reference_year: i32,
}

impl DurationParser {
    pub fn new(timezone: Tz, reference_year: i32) -> Self {
        Self {
            timezone,
            reference_year,
        }
    }

    /// Parse the ordered duration lines of one record.
    ///
    /// Lines are joined and whitespace around `-` and `/` separators is
    /// collapsed before matching, so `12 / 03 - 15 / 03` and `12/03-15/03`
    /// are the same notation.
    pub fn parse(&self, lines: &[String]) -> Result<Vec<Duration>> {
        let text = collapse_separators(&lines.join(" "));

        if SINGLE_DAY_RE.is_match(&text) {
            return Ok(vec![self.resolve_date_range(&text, &text, &text)]);
        }

        let mut durations = Vec::new();
        let mut claimed: Vec<(usize, usize)> = Vec::new();

        for captures in DATE_RANGE_RE.captures_iter(&text) {
            let whole = captures.get(0).expect("match has a whole group");
            claimed.push((whole.start(), whole.end()));
            durations.push(self.resolve_date_range(
                whole.as_str(),
                &captures["start"],
                &captures["end"],
            ));
        }

        for captures in DAY_TIME_RANGE_RE.captures_iter(&text) {
            let whole = captures.get(0).expect("match has a whole group");
            if overlaps(&claimed, whole.start(), whole.end()) {
                continue;
            }
            claimed.push((whole.start(), whole.end()));
            durations.push(self.resolve_day_time_range(
                whole.as_str(),
                &captures["start"],
                &captures["end"],
            ));
        }

        for captures in CROSS_DAY_TIME_RANGE_RE.captures_iter(&text) {
            let whole = captures.get(0).expect("match has a whole group");
            if overlaps(&claimed, whole.start(), whole.end()) {
                continue;
            }
            claimed.push((whole.start(), whole.end()));
            durations.push(self.resolve_cross_day_time_range(
                whole.as_str(),
                &captures["start"],
                &captures["end"],
            ));
        }

        if durations.is_empty() {
            return Err(Error::no_durations(text));
        }

        debug!("Extracted {} durations from '{}'", durations.len(), text);

        Ok(durations)
    }

    /// Resolve a date range, filling a partial start from the parsed end
    fn resolve_date_range(&self, raw: &str, start_raw: &str, end_raw: &str) -> Duration {
        // Trailing hyphen notation for the end year ("15/03-2024") means the
        // same as a slash
        let end_text = end_raw.replace('-', "/");
        let start_text = start_raw.trim_end_matches('/');

        let end_date = self.parse_end_date(&end_text);
        let start_date = self.parse_start_date(start_text, end_date);

        // A range written as the same full date twice covers that whole day
        let end_date = if start_text == end_text && is_full_date(&end_text) {
            end_date.and_then(|date| date.checked_add_days(Days::new(1)))
        } else {
            end_date
        };

        Duration {
            raw: raw.to_string(),
            start: self.midnight_bound(start_date, start_raw),
            end: self.midnight_bound(end_date, end_raw),
        }
    }

    /// Resolve `DD/MM/YYYY, Hh` - `H:MM`: both instants on the same day
    fn resolve_day_time_range(&self, raw: &str, start_raw: &str, end_raw: &str) -> Duration {
        let start_naive = parse_date_bare_hour(start_raw);
        let end_naive = start_naive.and_then(|start| {
            let (hour, minute) = end_raw.split_once(':')?;
            start
                .date()
                .and_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
        });

        Duration {
            raw: raw.to_string(),
            start: self.instant_bound(start_naive, start_raw),
            end: self.instant_bound(end_naive, end_raw),
        }
    }

    /// Resolve `DD/MM/YYYY, HhMM` -- `DD/MM/YYYY, HhMM`: sides independent
    fn resolve_cross_day_time_range(&self, raw: &str, start_raw: &str, end_raw: &str) -> Duration {
        Duration {
            raw: raw.to_string(),
            start: self.instant_bound(parse_date_hour_minute(start_raw), start_raw),
            end: self.instant_bound(parse_date_hour_minute(end_raw), end_raw),
        }
    }

    /// Parse the end side of a date range: `D/M/Y` directly, `D/M` against
    /// the reference year
    fn parse_end_date(&self, end: &str) -> Option<NaiveDate> {
        let parts: Vec<&str> = end.split('/').collect();
        match parts[..] {
            [day, month, year] => {
                NaiveDate::from_ymd_opt(parse_year(year)?, month.parse().ok()?, day.parse().ok()?)
            }
            [day, month] => NaiveDate::from_ymd_opt(
                self.reference_year,
                month.parse().ok()?,
                day.parse().ok()?,
            ),
            _ => None,
        }
    }

    /// Parse the start side, inheriting missing components from the end date
    fn parse_start_date(&self, start: &str, end_date: Option<NaiveDate>) -> Option<NaiveDate> {
        let parts: Vec<&str> = start.split('/').collect();
        match parts[..] {
            [day, month, year] => {
                NaiveDate::from_ymd_opt(parse_year(year)?, month.parse().ok()?, day.parse().ok()?)
            }
            [day, month] => {
                let anchor = end_date?;
                NaiveDate::from_ymd_opt(anchor.year(), month.parse().ok()?, day.parse().ok()?)
            }
            [day] => {
                let anchor = end_date?;
                NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), day.parse().ok()?)
            }
            _ => None,
        }
    }

    /// Localize a date at local midnight, degrading to raw text on failure
    fn midnight_bound(&self, date: Option<NaiveDate>, raw: &str) -> TimeBound {
        match date.and_then(|date| date.and_hms_opt(0, 0, 0)) {
            Some(naive) => self.localize(naive, raw),
            None => {
                warn!("Could not resolve date '{}', keeping raw text", raw);
                TimeBound::Raw(raw.to_string())
            }
        }
    }

    /// Localize a parsed datetime, degrading to raw text on failure
    fn instant_bound(&self, naive: Option<NaiveDateTime>, raw: &str) -> TimeBound {
        match naive {
            Some(naive) => self.localize(naive, raw),
            None => {
                warn!("Could not resolve date/time '{}', keeping raw text", raw);
                TimeBound::Raw(raw.to_string())
            }
        }
    }

    fn localize(&self, naive: NaiveDateTime, raw: &str) -> TimeBound {
        match self.timezone.from_local_datetime(&naive) {
            LocalResult::Single(instant) => TimeBound::Instant(instant.fixed_offset()),
            // DST fall-back repeats the local hour; the earlier offset wins
            LocalResult::Ambiguous(earliest, _) => TimeBound::Instant(earliest.fixed_offset()),
            LocalResult::None => {
                warn!(
                    "Local time '{}' does not exist in {}, keeping raw text",
                    naive, self.timezone
                );
                TimeBound::Raw(raw.to_string())
            }
        }
    }
}

/// Join-and-collapse: whitespace around `-` and `/` carries no meaning
fn collapse_separators(text: &str) -> String {
    let text = DASH_SEPARATOR_RE.replace_all(text, "-");
    SLASH_SEPARATOR_RE.replace_all(&text, "/").into_owned()
}

fn overlaps(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|&(s, e)| start < e && s < end)
}

fn is_full_date(text: &str) -> bool {
    SINGLE_DAY_RE.is_match(text)
}

/// `YYYY` as written, `YY` per the two-digit-year convention (2000 + YY)
fn parse_year(year: &str) -> Option<i32> {
    match year.len() {
        4 => year.parse().ok(),
        2 => Some(2000 + year.parse::<i32>().ok()?),
        _ => None,
    }
}

/// `DD/MM/YYYY, Hh` to the date at that bare hour
fn parse_date_bare_hour(text: &str) -> Option<NaiveDateTime> {
    let (date_part, hour_part) = text.split_once(", ")?;
    let date = NaiveDate::parse_from_str(date_part, "%d/%m/%Y").ok()?;
    let hour: u32 = hour_part.strip_suffix('h')?.parse().ok()?;
    date.and_hms_opt(hour, 0, 0)
}

/// `DD/MM/YYYY, HhMM` to the date at hour:minute
fn parse_date_hour_minute(text: &str) -> Option<NaiveDateTime> {
    let (date_part, time_part) = text.split_once(", ")?;
    let date = NaiveDate::parse_from_str(date_part, "%d/%m/%Y").ok()?;
    let (hour, minute) = time_part.split_once('h')?;
    date.and_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}
