//! Integration tests for reading and writing catalog sources.

use std::io::Write;

use cine_ingest::{
    IngestError, MAX_CSV_FILE_SIZE, RawSource, read_raw_source, write_csv_table,
};
use cine_model::{RawRow, RowSchema};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const LEGACY_CSV: &str = "\
title,year,certificate,duration,genre,rating,description,stars,votes
Dark,(2017–2020),TV-MA,60 min,\"Crime, Drama, Mystery\",8.7,A missing child.,\"['Louis Hofmann, ', 'Karoline Eichhorn']\",\"384,577\"

The Irishman,(2019),R,209 min,\"Biography, Crime, Drama\",7.8,A hitman looks back.,,\"383,000\"
";

fn load(content: &str, schema: Option<RowSchema>) -> RawSource {
    let file = create_temp_csv(content);
    read_raw_source(file.path(), MAX_CSV_FILE_SIZE, schema).unwrap()
}

#[test]
fn test_legacy_source() {
    let source = load(LEGACY_CSV, None);

    assert_eq!(source.schema, RowSchema::Legacy);
    assert_eq!(source.rows.len(), 2);
    let RawRow::Legacy(first) = &source.rows[0] else {
        panic!("expected legacy row");
    };
    assert_eq!(first.year.as_deref(), Some("(2017–2020)"));
    assert_eq!(first.genre.as_deref(), Some("Crime, Drama, Mystery"));
    assert_eq!(first.votes.as_deref(), Some("384,577"));

    let RawRow::Legacy(second) = &source.rows[1] else {
        panic!("expected legacy row");
    };
    assert_eq!(second.title, "The Irishman");
    assert_eq!(second.stars, None);
}

#[test]
fn test_header_case_does_not_matter() {
    let source = load("Title,RATING,Votes_Numeric\nDark,8.7,1000\n", None);

    assert_eq!(source.schema, RowSchema::Cleaned);
    let RawRow::Cleaned(row) = &source.rows[0] else {
        panic!("expected cleaned row");
    };
    assert_eq!(row.title, "Dark");
    assert_eq!(row.rating.as_deref(), Some("8.7"));
    assert_eq!(row.votes.as_deref(), Some("1000"));
}

#[test]
fn test_write_then_read_cleaned_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("n_movies_clean.csv");
    let headers = ["title", "start_year", "genres_list", "rating_numeric", "votes_numeric"];
    let rows = vec![vec![
        "Dark".to_string(),
        "2017".to_string(),
        "['Crime', 'Drama']".to_string(),
        "8.7".to_string(),
        "384577".to_string(),
    ]];

    assert_eq!(write_csv_table(&path, &headers, rows).unwrap(), 1);

    let source = read_raw_source(&path, MAX_CSV_FILE_SIZE, None).unwrap();
    assert_eq!(source.schema, RowSchema::Cleaned);
    assert_eq!(source.origin, path);
}

#[test]
fn test_header_only_source_is_empty() {
    let file = create_temp_csv("title,rating\n\n");
    let result = read_raw_source(file.path(), MAX_CSV_FILE_SIZE, None);

    assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
}
