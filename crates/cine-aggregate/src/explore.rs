//! Interactive filtering: minimum rating plus an optional genre.

use std::cmp::Ordering;
use std::fmt;

use cine_model::Record;
use serde::Serialize;

use crate::top::descending;

pub const TOP_TEN_SIZE: usize = 10;
/// Votes a title needs, strictly exceeded, to enter the top ten.
pub const TOP_TEN_MIN_VOTES: u64 = 100;

/// Genre part of an explore query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenreFilter {
    #[default]
    All,
    Only(String),
}

impl GenreFilter {
    /// `"all"` in any case means no filter; anything else is an exact genre.
    /// Surrounding whitespace is ignored either way.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Only(genre) => record.has_genre(genre),
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(genre) => f.write_str(genre),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExploreQuery {
    pub min_rating: f64,
    pub genre: GenreFilter,
}

impl ExploreQuery {
    pub fn new(min_rating: f64, genre: GenreFilter) -> Self {
        Self { min_rating, genre }
    }
}

/// Titles sharing one rating rounded to the nearest half point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingGroup {
    pub rating: f64,
    pub count: usize,
}

/// Output of one explore query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreView {
    pub matched: usize,
    pub rating_groups: Vec<RatingGroup>,
    pub top_ten: Vec<Record>,
}

/// Round to the nearest 0.5, halves going up.
pub fn round_to_half(rating: f64) -> f64 {
    (rating * 2.0 + 0.5).floor() / 2.0
}

/// Apply a query to the clean record set.
pub fn explore(records: &[Record], query: &ExploreQuery) -> ExploreView {
    let matched: Vec<&Record> = records
        .iter()
        .filter(|record| record.rating >= query.min_rating && query.genre.matches(record))
        .collect();

    let mut rating_groups: Vec<RatingGroup> = Vec::new();
    for record in &matched {
        let rating = round_to_half(record.rating);
        match rating_groups.iter_mut().find(|group| group.rating == rating) {
            Some(group) => group.count += 1,
            None => rating_groups.push(RatingGroup { rating, count: 1 }),
        }
    }
    rating_groups.sort_by(|a, b| a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal));

    let mut popular: Vec<&Record> = matched
        .iter()
        .copied()
        .filter(|record| record.votes > TOP_TEN_MIN_VOTES)
        .collect();
    popular.sort_by(|a, b| descending(a.rating, b.rating).then_with(|| b.votes.cmp(&a.votes)));

    ExploreView {
        matched: matched.len(),
        rating_groups,
        top_ten: popular.into_iter().take(TOP_TEN_SIZE).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, rating: f64, votes: u64, genres: &[&str]) -> Record {
        let mut record = Record::new(title, rating);
        record.votes = votes;
        record.genres = genres.iter().map(|g| g.to_string()).collect();
        record
    }

    fn titles(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_genre_filter_parse() {
        assert_eq!(GenreFilter::parse("all"), GenreFilter::All);
        assert_eq!(GenreFilter::parse(" ALL "), GenreFilter::All);
        assert_eq!(
            GenreFilter::parse("Drama"),
            GenreFilter::Only("Drama".to_string())
        );
        assert_eq!(
            GenreFilter::parse(" Drama "),
            GenreFilter::Only("Drama".to_string())
        );
    }

    #[test]
    fn test_padded_genre_still_matches() {
        let records = vec![
            record("A", 8.0, 5_000, &["Drama"]),
            record("B", 7.0, 5_000, &["Comedy"]),
        ];
        let query = ExploreQuery::new(0.0, GenreFilter::parse(" Drama "));
        let view = explore(&records, &query);
        assert_eq!(view.matched, 1);
        assert_eq!(titles(&view.top_ten), vec!["A"]);
    }

    #[test]
    fn test_round_to_half() {
        assert_eq!(round_to_half(7.2), 7.0);
        assert_eq!(round_to_half(7.25), 7.5);
        assert_eq!(round_to_half(7.74), 7.5);
        assert_eq!(round_to_half(7.75), 8.0);
        assert_eq!(round_to_half(10.0), 10.0);
    }

    #[test]
    fn test_top_ten_breaks_ties_on_votes() {
        let records = vec![
            record("A", 8.0, 5_000, &["Drama"]),
            record("B", 8.0, 50_000, &["Drama"]),
        ];
        let view = explore(&records, &ExploreQuery::default());
        assert_eq!(titles(&view.top_ten), vec!["B", "A"]);
    }

    #[test]
    fn test_filters_and_groups() {
        let records = vec![
            record("Low", 5.9, 500, &["Drama"]),
            record("Crime", 7.1, 500, &["Crime"]),
            record("Quiet", 7.2, 50, &["Drama"]),
            record("Loud", 8.9, 9_000, &["Drama", "Action"]),
            record("Close", 6.8, 400, &["Drama"]),
        ];
        let query = ExploreQuery::new(6.0, GenreFilter::parse("Drama"));
        let view = explore(&records, &query);

        assert_eq!(view.matched, 3);
        assert_eq!(
            view.rating_groups,
            vec![
                RatingGroup {
                    rating: 7.0,
                    count: 2
                },
                RatingGroup {
                    rating: 9.0,
                    count: 1
                },
            ]
        );
        // Quiet has too few votes for the top ten.
        assert_eq!(titles(&view.top_ten), vec!["Loud", "Close"]);
    }

    #[test]
    fn test_genre_match_is_exact() {
        let records = vec![record("Dark", 8.7, 1_000, &["Drama"])];
        let query = ExploreQuery::new(0.0, GenreFilter::parse("drama"));
        assert_eq!(explore(&records, &query).matched, 0);
    }
}
