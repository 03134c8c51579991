use std::path::PathBuf;

use cine_model::{AggregateViews, PipelineReport, RankEntry, Record};
use cine_transform::CleaningSummary;
use serde::Serialize;

/// Everything the rendering layer needs, as written by `cine export`.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub records: &'a [Record],
    pub views: &'a AggregateViews,
    pub report: &'a PipelineReport,
}

/// Outcome of `cine clean`.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: CleaningSummary,
    /// Most common primary genres in the written file.
    pub primary_genres: Vec<RankEntry>,
}
