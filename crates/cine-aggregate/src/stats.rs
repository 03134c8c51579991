//! Headline numbers: overview, data quality, genre options.

use std::collections::BTreeSet;

use cine_model::{DataQuality, OverviewStats, Record};

/// Total, mean and best rating, and the number of distinct genres.
pub fn overview(records: &[Record]) -> OverviewStats {
    let total_titles = records.len();
    let mean_rating = (total_titles > 0)
        .then(|| records.iter().map(|record| record.rating).sum::<f64>() / total_titles as f64);
    let max_rating = records.iter().map(|record| record.rating).reduce(f64::max);

    OverviewStats {
        total_titles,
        mean_rating,
        max_rating,
        unique_genres: genre_options(records).len(),
    }
}

/// Count records missing each optional field. A zero duration counts as
/// missing.
pub fn data_quality(records: &[Record]) -> DataQuality {
    let mut quality = DataQuality {
        total: records.len(),
        ..DataQuality::default()
    };
    for record in records {
        quality.missing_duration += usize::from(
            record
                .duration_minutes
                .is_none_or(|minutes| minutes == 0),
        );
        quality.missing_year += usize::from(record.year.is_none());
        quality.missing_genres += usize::from(record.genres.is_empty());
        quality.missing_description += usize::from(record.description.is_none());
    }
    quality
}

/// Every distinct genre, sorted.
pub fn genre_options(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.genres.iter())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}
