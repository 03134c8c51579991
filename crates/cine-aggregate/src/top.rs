//! Most popular and best rated titles.

use std::cmp::Ordering;

use cine_model::Record;

pub const TOP_CONTENT_SIZE: usize = 15;
/// Votes a title needs, strictly exceeded, to count as popular.
pub const TOP_CONTENT_MIN_VOTES: u64 = 1000;

/// Best-rated popular titles.
///
/// Sorted by rating alone. Equal ratings keep input order, unlike the
/// explore view's top ten which breaks ties on votes.
pub fn top_content(records: &[Record]) -> Vec<Record> {
    let mut popular: Vec<&Record> = records
        .iter()
        .filter(|record| record.votes > TOP_CONTENT_MIN_VOTES)
        .collect();
    popular.sort_by(|a, b| descending(a.rating, b.rating));
    popular
        .into_iter()
        .take(TOP_CONTENT_SIZE)
        .cloned()
        .collect()
}

/// Descending order for finite floats.
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
