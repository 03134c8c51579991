//! Integration tests: legacy rows through the offline cleaner and back.

use std::collections::BTreeMap;

use cine_model::{ContentType, LegacyRow, RowSchema};
use cine_transform::{CLEANED_COLUMNS, clean_rows, normalize_legacy, normalize_row};

fn legacy_row(pairs: &[(&str, &str)]) -> LegacyRow {
    let fields: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    LegacyRow::from_fields(&fields)
}

fn series_row() -> LegacyRow {
    legacy_row(&[
        ("title", "Dark"),
        ("year", "(2017–2020)"),
        ("certificate", "TV-MA"),
        ("duration", "60 min"),
        ("genre", "Crime, Drama, Mystery"),
        ("rating", "8.7"),
        ("description", "A missing child sets four families on a hunt."),
        (
            "stars",
            "['Baran bo Odar, ', 'Jantje Friese', '| ', '    Stars:', 'Louis Hofmann, ', 'Karoline Eichhorn']",
        ),
        ("votes", "384,577"),
    ])
}

#[test]
fn test_cleaned_output_reads_back_as_cleaned_layout() {
    let (entries, summary) = clean_rows(&[series_row()]);
    assert_eq!(summary.output_rows, 1);
    assert_eq!(summary.tv_series, 1);

    let cells = entries[0].to_fields();
    assert_eq!(cells.len(), CLEANED_COLUMNS.len());
    let fields: BTreeMap<String, String> = CLEANED_COLUMNS
        .iter()
        .map(|name| (*name).to_string())
        .zip(cells)
        .collect();

    let headers: Vec<&str> = CLEANED_COLUMNS.to_vec();
    let schema = RowSchema::detect(&headers);
    assert_eq!(schema, RowSchema::Cleaned);

    let record = normalize_row(&schema.decode(&fields)).unwrap();
    assert_eq!(record.title, "Dark");
    assert_eq!(record.year, Some(2017));
    assert_eq!(record.end_year, Some(2020));
    assert_eq!(record.duration_minutes, Some(60));
    assert_eq!(record.genres, vec!["Crime", "Drama", "Mystery"]);
    assert_eq!(record.rating, 8.7);
    assert_eq!(record.votes, 384_577);
    assert_eq!(record.content_type, Some(ContentType::TvSeries));
    assert_eq!(record.directors, vec!["Baran bo Odar", "Jantje Friese"]);
    assert_eq!(record.actors, vec!["Louis Hofmann", "Karoline Eichhorn"]);
}

#[test]
fn test_legacy_and_cleaned_paths_agree_on_shared_fields() {
    let row = series_row();
    let legacy = normalize_legacy(&row).unwrap();

    let (entries, _) = clean_rows(std::slice::from_ref(&row));
    let fields: BTreeMap<String, String> = CLEANED_COLUMNS
        .iter()
        .map(|name| (*name).to_string())
        .zip(entries[0].to_fields())
        .collect();
    let cleaned = normalize_row(&RowSchema::Cleaned.decode(&fields)).unwrap();

    assert_eq!(legacy.title, cleaned.title);
    assert_eq!(legacy.year, cleaned.year);
    assert_eq!(legacy.duration_minutes, cleaned.duration_minutes);
    assert_eq!(legacy.genres, cleaned.genres);
    assert_eq!(legacy.rating, cleaned.rating);
    assert_eq!(legacy.votes, cleaned.votes);
    // Only the cleaned path knows these.
    assert_eq!(legacy.content_type, None);
    assert!(legacy.directors.is_empty());
}

#[test]
fn test_untitled_and_unrated_rows() {
    let rows = vec![
        legacy_row(&[("title", ""), ("rating", "7.0")]),
        legacy_row(&[("title", "No Rating"), ("year", "(2001)")]),
    ];
    let (entries, summary) = clean_rows(&rows);

    assert_eq!(summary.input_rows, 2);
    assert_eq!(summary.output_rows, 1);
    assert_eq!(summary.valid_rating, 0);
    assert_eq!(entries[0].content_type, ContentType::Movie);
    assert!(normalize_legacy(&rows[1]).is_none());
}

#[test]
fn test_apostrophe_in_cast_keeps_credits() {
    let row = legacy_row(&[
        ("title", "The Post"),
        ("year", "(2017)"),
        ("rating", "7.2"),
        (
            "stars",
            "['Steven Spielberg', '| ', '    Stars:', \"Conan O'Brien\", 'Tom Hanks']",
        ),
    ]);
    let (entries, _) = clean_rows(&[row]);

    assert_eq!(entries[0].directors, vec!["Steven Spielberg"]);
    assert_eq!(entries[0].actors, vec!["Conan O'Brien", "Tom Hanks"]);
}
