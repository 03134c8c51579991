//! Raw input rows and schema detection.
//!
//! Two source layouts are recognized:
//!
//! - **Legacy**: one messy string per field (`genre`, `duration`, `votes`, `year`).
//! - **Cleaned**: structurally separated fields produced by the offline cleaner
//!   (`genres_list`, `duration_minutes`, `votes_numeric`, `start_year`, ...).
//!
//! The layout is decided once per source from its headers, and every row is
//! then decoded into the matching [`RawRow`] variant.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

/// Headers whose presence selects the pre-cleaned layout.
const CLEANED_MARKERS: [&str; 2] = ["genres_list", "votes_numeric"];

/// Named-field access to one raw row.
pub trait FieldSource {
    /// Raw cell for `name`, or `None` when the column is absent.
    fn field(&self, name: &str) -> Option<&str>;

    /// Trimmed cell value; blank cells read as `None`.
    fn text(&self, name: &str) -> Option<String> {
        self.field(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// First non-blank value among alternative column names.
    fn first_text(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.text(name))
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Input layout of a source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowSchema {
    Legacy,
    Cleaned,
}

impl RowSchema {
    /// Pick the layout from header names.
    ///
    /// A `genres_list` or `votes_numeric` column selects [`RowSchema::Cleaned`];
    /// anything else is treated as legacy.
    pub fn detect<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cleaned = headers.into_iter().any(|header| {
            let header = header.as_ref().trim();
            CLEANED_MARKERS
                .iter()
                .any(|marker| header.eq_ignore_ascii_case(marker))
        });
        if cleaned { Self::Cleaned } else { Self::Legacy }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Cleaned => "cleaned",
        }
    }

    /// Decode one row according to this layout.
    pub fn decode<F: FieldSource + ?Sized>(self, fields: &F) -> RawRow {
        match self {
            Self::Legacy => RawRow::Legacy(LegacyRow::from_fields(fields)),
            Self::Cleaned => RawRow::Cleaned(CleanedRow::from_fields(fields)),
        }
    }
}

impl fmt::Display for RowSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row in the legacy layout. Every field is the untouched source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyRow {
    pub title: String,
    pub year: Option<String>,
    pub certificate: Option<String>,
    pub duration: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<String>,
    pub description: Option<String>,
    pub votes: Option<String>,
    pub stars: Option<String>,
}

impl LegacyRow {
    pub fn from_fields<F: FieldSource + ?Sized>(fields: &F) -> Self {
        Self {
            title: fields.text("title").unwrap_or_default(),
            year: fields.text("year"),
            certificate: fields.text("certificate"),
            duration: fields.text("duration"),
            genre: fields.text("genre"),
            rating: fields.text("rating"),
            description: fields.text("description"),
            votes: fields.text("votes"),
            stars: fields.text("stars"),
        }
    }
}

/// Row in the pre-cleaned layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedRow {
    pub title: String,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
    pub content_type: Option<String>,
    pub certificate: Option<String>,
    pub duration_minutes: Option<String>,
    pub primary_genre: Option<String>,
    pub genres_list: Option<String>,
    /// `rating_numeric`, falling back to `rating`.
    pub rating: Option<String>,
    pub description: Option<String>,
    /// `directores` or `directors` list literal.
    pub directors: Option<String>,
    /// `actores` or `actors` list literal.
    pub actors: Option<String>,
    /// `votes_numeric`, falling back to `votes`.
    pub votes: Option<String>,
}

impl CleanedRow {
    pub fn from_fields<F: FieldSource + ?Sized>(fields: &F) -> Self {
        Self {
            title: fields.text("title").unwrap_or_default(),
            start_year: fields.text("start_year"),
            end_year: fields.text("end_year"),
            content_type: fields.text("content_type"),
            certificate: fields.text("certificate"),
            duration_minutes: fields.text("duration_minutes"),
            primary_genre: fields.text("primary_genre"),
            genres_list: fields.text("genres_list"),
            rating: fields.first_text(&["rating_numeric", "rating"]),
            description: fields.text("description"),
            directors: fields.first_text(&["directores", "directors"]),
            actors: fields.first_text(&["actores", "actors"]),
            votes: fields.first_text(&["votes_numeric", "votes"]),
        }
    }
}

/// A raw row tagged with the layout it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRow {
    Legacy(LegacyRow),
    Cleaned(CleanedRow),
}

impl RawRow {
    pub fn schema(&self) -> RowSchema {
        match self {
            Self::Legacy(_) => RowSchema::Legacy,
            Self::Cleaned(_) => RowSchema::Cleaned,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Legacy(row) => &row.title,
            Self::Cleaned(row) => &row.title,
        }
    }
}
