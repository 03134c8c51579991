//! End-to-end tests: CSV file in, catalog out.

use std::io::Write;

use cine_aggregate::{ExploreQuery, GenreFilter};
use cine_core::{LoadError, PipelineOptions, SchemaChoice, load_catalog};
use cine_ingest::IngestError;
use cine_model::{ContentType, RejectionReason, RowSchema};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn options() -> PipelineOptions {
    PipelineOptions::new().with_current_year(2025)
}

#[test]
fn test_duplicate_and_invalid_rows_leave_one_record() {
    let file = create_temp_csv(
        "title,year,duration,genre,rating,votes\n\
         Dark,(2017–2020),60 min,\"Crime, Drama\",8.7,\"384,577\"\n\
         dark ,(2017),60 min,Crime,8.5,\"12,000\"\n\
         Broken,(2019),90 min,Drama,11,\"5,000\"\n",
    );
    let catalog = load_catalog(file.path(), options()).unwrap();

    assert_eq!(catalog.schema(), RowSchema::Legacy);
    assert_eq!(catalog.records().len(), 1);
    let survivor = &catalog.records()[0];
    assert_eq!(survivor.title, "Dark");
    assert_eq!(survivor.votes, 384_577);

    let report = catalog.report();
    assert_eq!(report.raw_rows, 3);
    assert_eq!(report.duplicates_removed, 1);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.rejections.get(RejectionReason::RatingOutOfRange), 1);
    assert_eq!(catalog.origin(), Some(file.path()));
}

#[test]
fn test_validation_boundaries() {
    let file = create_temp_csv(
        "title,year,duration,rating,votes\n\
         Rating Edge,(2000),90 min,10.0,10\n\
         Rating Over,(2000),90 min,10.1,10\n\
         Long Edge,(2000),600 min,7.0,10\n\
         Long Over,(2000),601 min,7.0,10\n\
         Year Edge,(1900),90 min,7.0,10\n\
         Year Under,(1899),90 min,7.0,10\n",
    );
    let catalog = load_catalog(file.path(), options()).unwrap();

    let titles: Vec<&str> = catalog.records().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Rating Edge", "Long Edge", "Year Edge"]);
    assert_eq!(catalog.report().rejected, 3);
}

#[test]
fn test_cleaned_source() {
    let file = create_temp_csv(
        "title,start_year,end_year,content_type,duration_minutes,primary_genre,genres_list,rating_numeric,directores,actores,votes_numeric\n\
         Dark,2017.0,2020.0,TV Series,60.0,Crime,\"['Crime', 'Drama']\",8.7,\"['Baran bo Odar']\",\"['Louis Hofmann']\",384577.0\n\
         The Irishman,2019.0,,Movie,209.0,Biography,not a list,7.8,[],\"['Robert De Niro']\",383000.0\n\
         Zero,2020.0,,Movie,90.0,Drama,\"['Drama']\",0,[],[],10.0\n",
    );
    let catalog = load_catalog(file.path(), options()).unwrap();

    assert_eq!(catalog.schema(), RowSchema::Cleaned);
    assert_eq!(catalog.report().missing_rating, 1);
    assert_eq!(catalog.records().len(), 2);
    assert_eq!(catalog.records()[1].genres, vec!["Biography"]);

    let cleaned = catalog.views().cleaned.as_ref().unwrap();
    assert_eq!(cleaned.content_types[0].content_type, ContentType::Movie);
    assert_eq!(cleaned.content_types[1].content_type, ContentType::TvSeries);
    assert_eq!(cleaned.director_ranking.len(), 1);
    assert_eq!(cleaned.actor_ranking.len(), 2);
}

#[test]
fn test_forced_schema() {
    let file = create_temp_csv("title,year,genre,rating,votes\nDark,(2017),Crime,8.7,\"1,000\"\n");
    let catalog = load_catalog(
        file.path(),
        options().with_schema(SchemaChoice::Cleaned),
    )
    .unwrap();

    assert_eq!(catalog.schema(), RowSchema::Cleaned);
    // Legacy year text is not a number in the cleaned layout.
    assert_eq!(catalog.records()[0].year, None);
    assert_eq!(catalog.records()[0].votes, 1_000);
}

#[test]
fn test_explore_through_catalog() {
    let file = create_temp_csv(
        "title,year,genre,rating,votes\n\
         A,(2001),Drama,8.0,\"5,000\"\n\
         B,(2002),Drama,8.0,\"50,000\"\n\
         C,(2003),Comedy,9.0,\"70,000\"\n",
    );
    let catalog = load_catalog(file.path(), options()).unwrap();

    let view = catalog.explore(&ExploreQuery::new(7.5, GenreFilter::parse("Drama")));
    assert_eq!(view.matched, 2);
    let top: Vec<&str> = view.top_ten.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(top, vec!["B", "A"]);

    let content: Vec<&str> = catalog
        .views()
        .top_content
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(content, vec!["C", "A", "B"]);
}

#[test]
fn test_missing_source_is_unavailable() {
    let result = load_catalog(std::path::Path::new("/nonexistent/n_movies.csv"), options());

    assert!(matches!(
        result,
        Err(LoadError::SourceUnavailable {
            source: IngestError::FileNotFound { .. },
            ..
        })
    ));
}

#[test]
fn test_empty_source_is_unavailable() {
    let file = create_temp_csv("title,rating\n");
    let result = load_catalog(file.path(), options());

    assert!(matches!(
        result,
        Err(LoadError::SourceUnavailable {
            source: IngestError::EmptyCsv { .. },
            ..
        })
    ));
}

#[test]
fn test_oversized_source_is_unavailable() {
    let file = create_temp_csv("title,rating\nDark,8.7\n");
    let result = load_catalog(file.path(), options().with_max_file_size(8));

    assert!(matches!(
        result,
        Err(LoadError::SourceUnavailable {
            source: IngestError::FileTooLarge { .. },
            ..
        })
    ));
}
