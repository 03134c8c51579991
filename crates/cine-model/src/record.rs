use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder genre reported when a record has no genres.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Kind of title, as classified by the pre-cleaned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentType {
    Movie,
    #[serde(rename = "TV Series")]
    TvSeries,
    Miniseries,
    Unknown,
}

impl ContentType {
    /// All buckets in reporting order.
    pub const ALL: [ContentType; 4] = [
        ContentType::Movie,
        ContentType::TvSeries,
        ContentType::Miniseries,
        ContentType::Unknown,
    ];

    /// Parse a source label. Anything unrecognized falls into `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "Movie" => Self::Movie,
            "TV Series" => Self::TvSeries,
            "Miniseries" => Self::Miniseries,
            _ => Self::Unknown,
        }
    }

    /// Label as written in source files and exports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::TvSeries => "TV Series",
            Self::Miniseries => "Miniseries",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One canonical title entry.
///
/// Created once by the normalizer and never mutated afterwards. After
/// validation `rating` is always within `[1, 10]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub title: String,
    pub year: Option<i32>,
    /// Series end year; only the pre-cleaned layout carries it.
    pub end_year: Option<i32>,
    pub certificate: Option<String>,
    pub duration_minutes: Option<i32>,
    /// Ordered genres, never containing blank entries.
    pub genres: Vec<String>,
    pub rating: f64,
    pub description: Option<String>,
    pub votes: u64,
    pub content_type: Option<ContentType>,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
}

impl Record {
    /// Minimal record with only the required fields set.
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            year: None,
            end_year: None,
            certificate: None,
            duration_minutes: None,
            genres: Vec::new(),
            rating,
            description: None,
            votes: 0,
            content_type: None,
            directors: Vec::new(),
            actors: Vec::new(),
        }
    }

    /// First genre, or [`UNKNOWN_GENRE`] when there is none.
    pub fn primary_genre(&self) -> &str {
        self.genres.first().map_or(UNKNOWN_GENRE, String::as_str)
    }

    /// Exact membership test used by the interactive genre filter.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}
