//! Frequency rankings over genre and credit lists.

use std::collections::HashMap;

use cine_model::{RankEntry, Record, UNKNOWN_GENRE};

/// Entries kept by every ranking.
pub const RANKING_SIZE: usize = 10;

/// Count names and keep the `limit` most frequent.
///
/// Blank names are skipped. Ties keep first-seen order.
pub fn rank_names<'a, I>(names: I, limit: usize) -> Vec<RankEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries: Vec<RankEntry> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for name in names {
        if name.trim().is_empty() {
            continue;
        }
        match positions.get(name) {
            Some(&idx) => entries[idx].count += 1,
            None => {
                positions.insert(name, entries.len());
                entries.push(RankEntry::new(name, 1));
            }
        }
    }

    // Stable: equal counts stay in insertion order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}

/// Top genres across all records, excluding the `Unknown` placeholder.
pub fn genre_ranking(records: &[Record]) -> Vec<RankEntry> {
    rank_names(
        records
            .iter()
            .flat_map(|record| record.genres.iter().map(String::as_str))
            .filter(|genre| *genre != UNKNOWN_GENRE),
        RANKING_SIZE,
    )
}

pub fn director_ranking(records: &[Record]) -> Vec<RankEntry> {
    rank_names(
        records
            .iter()
            .flat_map(|record| record.directors.iter().map(String::as_str)),
        RANKING_SIZE,
    )
}

pub fn actor_ranking(records: &[Record]) -> Vec<RankEntry> {
    rank_names(
        records
            .iter()
            .flat_map(|record| record.actors.iter().map(String::as_str)),
        RANKING_SIZE,
    )
}
