//! Aggregate views handed to the rendering layer.
//!
//! All views are computed in one pass over a finished record set and are
//! read-only afterwards.

use serde::{Deserialize, Serialize};

use crate::record::{ContentType, Record};

/// One fixed-width bin of the rating histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub count: usize,
}

/// Name with its occurrence count (genre, director, actor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub name: String,
    pub count: usize,
}

impl RankEntry {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeCount {
    pub content_type: ContentType,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeCount {
    pub decade: i32,
    pub count: usize,
}

/// Least-squares line `rating = slope * duration + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Scatter sample of duration against rating, with its trend line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationRatingView {
    /// Most-voted titles with a known duration.
    pub sample: Vec<Record>,
    /// `None` when the sample is too small or degenerate to fit.
    pub regression: Option<Regression>,
}

/// Headline numbers for the overview panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_titles: usize,
    pub mean_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub unique_genres: usize,
}

/// Missing-field counts over the clean set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuality {
    pub total: usize,
    pub missing_duration: usize,
    pub missing_year: usize,
    pub missing_genres: usize,
    pub missing_description: usize,
}

/// Views that need the structured fields of the pre-cleaned layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedSchemaViews {
    pub content_types: Vec<ContentTypeCount>,
    pub director_ranking: Vec<RankEntry>,
    pub actor_ranking: Vec<RankEntry>,
    pub decade_timeline: Vec<DecadeCount>,
}

/// Every derived summary over one record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateViews {
    pub overview: OverviewStats,
    pub data_quality: DataQuality,
    pub rating_histogram: Vec<HistogramBin>,
    pub genre_ranking: Vec<RankEntry>,
    pub top_content: Vec<Record>,
    pub duration_rating: DurationRatingView,
    /// Sorted distinct genres, for the interactive filter.
    pub genre_options: Vec<String>,
    pub cleaned: Option<CleanedSchemaViews>,
}
