//! Group-by views available for the pre-cleaned layout.

use std::collections::BTreeMap;

use cine_model::{ContentType, ContentTypeCount, DecadeCount, Record};

/// First year of the decade timeline.
pub const TIMELINE_START: i32 = 1950;
/// Last year of the decade timeline (inclusive).
pub const TIMELINE_END: i32 = 2024;

/// Titles per content type, in [`ContentType::ALL`] order.
///
/// Records without a type count as `Unknown`. Empty buckets are omitted.
pub fn content_type_breakdown(records: &[Record]) -> Vec<ContentTypeCount> {
    let mut counts = [0usize; ContentType::ALL.len()];
    for record in records {
        let content_type = record.content_type.unwrap_or(ContentType::Unknown);
        if let Some(slot) = ContentType::ALL
            .iter()
            .position(|candidate| *candidate == content_type)
        {
            counts[slot] += 1;
        }
    }

    ContentType::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(content_type, count)| ContentTypeCount {
            content_type: *content_type,
            count,
        })
        .collect()
}

/// Titles per decade for years in 1950..=2024, oldest first.
pub fn decade_timeline(records: &[Record]) -> Vec<DecadeCount> {
    let mut decades: BTreeMap<i32, usize> = BTreeMap::new();
    for year in records.iter().filter_map(|record| record.year) {
        if (TIMELINE_START..=TIMELINE_END).contains(&year) {
            *decades.entry(year.div_euclid(10) * 10).or_default() += 1;
        }
    }
    decades
        .into_iter()
        .map(|(decade, count)| DecadeCount { decade, count })
        .collect()
}
