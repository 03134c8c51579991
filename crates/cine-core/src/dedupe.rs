//! Duplicate title removal.

use std::collections::HashMap;

use cine_model::Record;
use tracing::{debug, trace};

/// Identity of a title: lowercased, trimmed title plus year.
///
/// A missing year is written as `unknown`.
pub fn dedupe_key(record: &Record) -> String {
    let title = record.title.to_lowercase();
    match record.year {
        Some(year) => format!("{}|{year}", title.trim()),
        None => format!("{}|unknown", title.trim()),
    }
}

/// Keep one record per [`dedupe_key`], returning the survivors and the
/// number of records removed.
///
/// The first record seen for a key holds its position. A later duplicate
/// replaces it only with strictly more votes; equal votes keep the first.
pub fn dedupe_records(records: Vec<Record>) -> (Vec<Record>, usize) {
    let total = records.len();
    let mut kept: Vec<Record> = Vec::with_capacity(total);
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(total);

    for record in records {
        let key = dedupe_key(&record);
        match positions.get(&key) {
            Some(&idx) => {
                if record.votes > kept[idx].votes {
                    trace!(key = %key, votes = record.votes, "duplicate replaced");
                    kept[idx] = record;
                } else {
                    trace!(key = %key, votes = record.votes, "duplicate dropped");
                }
            }
            None => {
                positions.insert(key, kept.len());
                kept.push(record);
            }
        }
    }

    let removed = total - kept.len();
    debug!(kept = kept.len(), removed, "deduplication complete");
    (kept, removed)
}
