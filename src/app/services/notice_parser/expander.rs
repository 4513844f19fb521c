//! Expansion of intermediate records into output records
//!
//! An identifier range with one duration per identifier becomes one record
//! per (identifier, duration) pair, paired positionally.

use tracing::debug;

use crate::app::models::{Record, RecordData};

/// Expand one intermediate record into its final records.
///
/// A single identifier keeps only the first duration, even when several were
/// parsed. When the duration list is shorter than the identifier set, the
/// surplus identifiers are silently dropped; historical output parity
/// depends on this truncation.
pub fn expand_record(data: RecordData) -> Vec<Record> {
    let RecordData {
        ids,
        country,
        durations,
        reason,
    } = data;

    if ids.len() > 1 && durations.len() < ids.len() {
        debug!(
            "Identifier range has {} ids but only {} durations; truncating",
            ids.len(),
            durations.len()
        );
    }

    ids.into_iter()
        .zip(durations)
        .map(|(id, duration)| Record {
            id,
            country: country.clone(),
            duration,
            reason: reason.clone(),
        })
        .collect()
}
