//! Raw row to [`Record`] mapping.

use cine_model::{CleanedRow, ContentType, LegacyRow, RawRow, Record};
use tracing::trace;

use crate::normalization::{
    parse_duration_minutes, parse_duration_text, parse_genre_list, parse_genre_text,
    parse_name_list, parse_rating, parse_votes, parse_year_field, parse_year_text,
};

/// Normalize a raw row of either layout.
///
/// Returns None when the row has no usable rating.
pub fn normalize_row(row: &RawRow) -> Option<Record> {
    match row {
        RawRow::Legacy(row) => normalize_legacy(row),
        RawRow::Cleaned(row) => normalize_cleaned(row),
    }
}

/// Legacy layout: every field is extracted from free text.
///
/// Only a missing or unreadable rating drops the row here; out-of-range
/// ratings are left for the validator.
pub fn normalize_legacy(row: &LegacyRow) -> Option<Record> {
    let Some(rating) = parse_rating(row.rating.as_deref()) else {
        trace!(title = %row.title, "legacy row without rating");
        return None;
    };
    Some(Record {
        title: row.title.clone(),
        year: parse_year_text(row.year.as_deref()),
        end_year: None,
        certificate: row.certificate.clone(),
        duration_minutes: parse_duration_text(row.duration.as_deref()),
        genres: parse_genre_text(row.genre.as_deref()),
        rating,
        description: row.description.clone(),
        votes: parse_votes(row.votes.as_deref()),
        content_type: None,
        directors: Vec::new(),
        actors: Vec::new(),
    })
}

/// Pre-cleaned layout: numeric coercion and list-literal decoding.
///
/// A rating of zero or below is treated as missing.
pub fn normalize_cleaned(row: &CleanedRow) -> Option<Record> {
    let Some(rating) = parse_rating(row.rating.as_deref()).filter(|rating| *rating > 0.0) else {
        trace!(title = %row.title, "cleaned row without positive rating");
        return None;
    };
    Some(Record {
        title: row.title.clone(),
        year: parse_year_field(row.start_year.as_deref()),
        end_year: parse_year_field(row.end_year.as_deref()),
        certificate: row.certificate.clone(),
        duration_minutes: parse_duration_minutes(row.duration_minutes.as_deref()),
        genres: parse_genre_list(row.genres_list.as_deref(), row.primary_genre.as_deref()),
        rating,
        description: row.description.clone(),
        votes: parse_votes(row.votes.as_deref()),
        content_type: row.content_type.as_deref().map(ContentType::parse),
        directors: parse_name_list(row.directors.as_deref()),
        actors: parse_name_list(row.actors.as_deref()),
    })
}
