//! Offline conversion of legacy rows into the pre-cleaned layout.
//!
//! The output is what the pre-cleaned ingestion path reads: split credits,
//! numeric year span and duration, decoded genre list, inferred content type
//! and a few count columns. The original legacy columns are carried along at
//! the end of each row.

use cine_model::{ContentType, LegacyRow, UNKNOWN_GENRE};
use serde::Serialize;
use tracing::{debug, info};

use crate::normalization::{
    YearSpan, format_list_literal, parse_duration_text, parse_genre_text, parse_rating,
    parse_vote_count, parse_year_span, split_credits,
};

/// Column order of a pre-cleaned file.
pub const CLEANED_COLUMNS: [&str; 23] = [
    "title",
    "start_year",
    "end_year",
    "content_type",
    "certificate",
    "duration_minutes",
    "primary_genre",
    "genres_list",
    "genre_count",
    "rating_numeric",
    "description",
    "directores",
    "director_count",
    "actores",
    "actor_count",
    "votes_numeric",
    "series_duration_years",
    "year",
    "duration",
    "genre",
    "rating",
    "stars",
    "votes",
];

/// Minutes above which a single-year title is taken for a miniseries.
const MINISERIES_MINUTES: i32 = 200;

/// One legacy row after cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedEntry {
    pub title: String,
    pub years: YearSpan,
    pub content_type: ContentType,
    pub duration_minutes: Option<i32>,
    pub genres: Vec<String>,
    pub rating: Option<f64>,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
    pub votes: Option<u64>,
    pub source: LegacyRow,
}

impl CleanedEntry {
    pub fn from_legacy(row: &LegacyRow) -> Self {
        let duration_minutes = parse_duration_text(row.duration.as_deref());
        let credits = split_credits(row.stars.as_deref());
        Self {
            title: row.title.clone(),
            years: parse_year_span(row.year.as_deref()),
            content_type: infer_content_type(row.year.as_deref(), duration_minutes),
            duration_minutes,
            genres: parse_genre_text(row.genre.as_deref()),
            rating: parse_rating(row.rating.as_deref()),
            directors: credits.directors,
            actors: credits.actors,
            votes: parse_vote_count(row.votes.as_deref()),
            source: row.clone(),
        }
    }

    pub fn primary_genre(&self) -> &str {
        self.genres.first().map_or(UNKNOWN_GENRE, String::as_str)
    }

    /// Cells in [`CLEANED_COLUMNS`] order.
    pub fn to_fields(&self) -> Vec<String> {
        let source = &self.source;
        vec![
            self.title.clone(),
            optional(self.years.start),
            optional(self.years.end),
            self.content_type.label().to_string(),
            source.certificate.clone().unwrap_or_default(),
            optional(self.duration_minutes),
            self.primary_genre().to_string(),
            format_list_literal(&self.genres),
            self.genres.len().to_string(),
            optional(self.rating),
            source.description.clone().unwrap_or_default(),
            format_list_literal(&self.directors),
            self.directors.len().to_string(),
            format_list_literal(&self.actors),
            self.actors.len().to_string(),
            optional(self.votes),
            self.years.length().to_string(),
            source.year.clone().unwrap_or_default(),
            source.duration.clone().unwrap_or_default(),
            source.genre.clone().unwrap_or_default(),
            source.rating.clone().unwrap_or_default(),
            source.stars.clone().unwrap_or_default(),
            source.votes.clone().unwrap_or_default(),
        ]
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Classify a title from its year text and running time.
///
/// A year span means a series; otherwise a very long single-year title is a
/// miniseries and anything else a movie.
pub fn infer_content_type(year_text: Option<&str>, duration_minutes: Option<i32>) -> ContentType {
    let Some(year_text) = year_text else {
        return ContentType::Unknown;
    };
    if year_text.contains(['–', '-']) {
        return ContentType::TvSeries;
    }
    if duration_minutes.is_some_and(|minutes| minutes > MINISERIES_MINUTES) {
        return ContentType::Miniseries;
    }
    ContentType::Movie
}

/// Counts describing one cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningSummary {
    pub input_rows: usize,
    pub output_rows: usize,
    pub valid_rating: usize,
    pub valid_votes: usize,
    pub valid_duration: usize,
    pub movies: usize,
    pub tv_series: usize,
    pub miniseries: usize,
    pub unknown: usize,
}

/// Clean a batch of legacy rows. Rows without a title are dropped.
pub fn clean_rows(rows: &[LegacyRow]) -> (Vec<CleanedEntry>, CleaningSummary) {
    let mut summary = CleaningSummary {
        input_rows: rows.len(),
        ..CleaningSummary::default()
    };
    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        if row.title.is_empty() {
            debug!("dropping untitled row");
            continue;
        }
        let entry = CleanedEntry::from_legacy(row);
        summary.valid_rating += usize::from(entry.rating.is_some());
        summary.valid_votes += usize::from(entry.votes.is_some());
        summary.valid_duration += usize::from(entry.duration_minutes.is_some());
        match entry.content_type {
            ContentType::Movie => summary.movies += 1,
            ContentType::TvSeries => summary.tv_series += 1,
            ContentType::Miniseries => summary.miniseries += 1,
            ContentType::Unknown => summary.unknown += 1,
        }
        entries.push(entry);
    }
    summary.output_rows = entries.len();
    info!(
        input_rows = summary.input_rows,
        output_rows = summary.output_rows,
        movies = summary.movies,
        tv_series = summary.tv_series,
        miniseries = summary.miniseries,
        "cleaning complete"
    );
    (entries, summary)
}
