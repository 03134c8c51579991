//! The catalog pipeline, from raw rows to records and views.
//!
//! Stages run in order, each inside its own span:
//! 1. **Load**: read the source and decode rows with one layout
//! 2. **Normalize**: map rows to records, dropping unusable ratings
//! 3. **Dedupe**: keep the most voted record per title and year
//! 4. **Validate**: exclude out-of-range records, tallying reasons
//! 5. **Aggregate**: compute every view over the clean set
//!
//! A [`Catalog`] is only handed out once every stage has finished.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cine_aggregate::{ExploreQuery, ExploreView, build_views, explore};
use cine_ingest::read_raw_source;
use cine_model::{AggregateViews, PipelineReport, RawRow, Record, RowSchema};
use cine_transform::normalize_row;
use tracing::{debug, info, info_span};

use crate::dedupe::dedupe_records;
use crate::error::{LoadError, Result};
use crate::options::PipelineOptions;
use crate::validate::validate_records;

/// Clean records of one run and what happened to the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub records: Vec<Record>,
    pub report: PipelineReport,
}

/// Normalize, deduplicate and validate decoded rows.
pub fn run_pipeline(schema: RowSchema, rows: &[RawRow], current_year: i32) -> PipelineOutput {
    let mut report = PipelineReport::new(schema);
    report.raw_rows = rows.len();

    let normalized: Vec<Record> = rows.iter().filter_map(normalize_row).collect();
    report.missing_rating = rows.len() - normalized.len();
    debug!(
        records = normalized.len(),
        missing_rating = report.missing_rating,
        "rows normalized"
    );

    let (unique, removed) = info_span!("dedupe").in_scope(|| dedupe_records(normalized));
    report.duplicates_removed = removed;

    let validation = info_span!("validate", current_year).in_scope(|| {
        let validation = validate_records(unique, current_year);
        for (reason, count) in validation.counts.iter() {
            debug!(reason = %reason, count, "records rejected");
        }
        validation
    });
    report.rejected = validation.rejected;
    report.rejections = validation.counts;
    report.records = validation.accepted.len();

    PipelineOutput {
        records: validation.accepted,
        report,
    }
}

/// A fully processed catalog: records, views and the report that explains
/// them.
///
/// The decoded rows are kept so [`Catalog::reload`] can recompute from the
/// same source without reading it again.
#[derive(Debug, Clone)]
pub struct Catalog {
    origin: Option<PathBuf>,
    schema: RowSchema,
    rows: Vec<RawRow>,
    options: PipelineOptions,
    records: Vec<Record>,
    views: AggregateViews,
    report: PipelineReport,
}

impl Catalog {
    /// Process rows already decoded with `schema`.
    pub fn from_rows(schema: RowSchema, rows: Vec<RawRow>, options: PipelineOptions) -> Self {
        let mut catalog = Self {
            origin: None,
            schema,
            rows,
            options,
            records: Vec::new(),
            views: AggregateViews::default(),
            report: PipelineReport::new(schema),
        };
        catalog.reload();
        catalog
    }

    /// Process in-memory rows of named string fields.
    ///
    /// The layout is detected from the union of field names unless the
    /// options force one.
    pub fn from_field_maps(rows: &[BTreeMap<String, String>], options: PipelineOptions) -> Self {
        let schema = options
            .schema
            .forced()
            .unwrap_or_else(|| RowSchema::detect(rows.iter().flat_map(BTreeMap::keys)));
        let decoded = rows.iter().map(|fields| schema.decode(fields)).collect();
        Self::from_rows(schema, decoded, options)
    }

    /// Recompute records, views and report from the retained rows.
    ///
    /// Nothing from the previous run is reused.
    pub fn reload(&mut self) {
        let current_year = self.options.resolved_year();
        let output = run_pipeline(self.schema, &self.rows, current_year);
        let views = info_span!("aggregate").in_scope(|| build_views(&output.records, self.schema));

        info!(
            schema = %self.schema,
            raw_rows = output.report.raw_rows,
            records = output.report.records,
            missing_rating = output.report.missing_rating,
            duplicates = output.report.duplicates_removed,
            rejected = output.report.rejected,
            "catalog ready"
        );
        self.records = output.records;
        self.report = output.report;
        self.views = views;
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn schema(&self) -> RowSchema {
        self.schema
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn raw_rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn views(&self) -> &AggregateViews {
        &self.views
    }

    pub fn report(&self) -> &PipelineReport {
        &self.report
    }

    /// Run an interactive query against the clean set.
    pub fn explore(&self, query: &ExploreQuery) -> ExploreView {
        explore(&self.records, query)
    }
}

/// Read a catalog CSV and run the whole pipeline over it.
///
/// Any failure to obtain the rows is reported as
/// [`LoadError::SourceUnavailable`]; nothing is retried.
pub fn load_catalog(path: &Path, options: PipelineOptions) -> Result<Catalog> {
    let source = info_span!("load", path = %path.display()).in_scope(|| {
        read_raw_source(path, options.max_file_size, options.schema.forced()).map_err(|source| {
            LoadError::SourceUnavailable {
                origin: path.to_path_buf(),
                source,
            }
        })
    })?;

    let mut catalog = Catalog::from_rows(source.schema, source.rows, options);
    catalog.origin = Some(source.origin);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cine_model::{LegacyRow, RejectionReason};

    fn legacy(title: &str, year: &str, rating: &str, votes: &str) -> RawRow {
        RawRow::Legacy(LegacyRow {
            title: title.to_string(),
            year: Some(year.to_string()),
            rating: Some(rating.to_string()),
            votes: Some(votes.to_string()),
            ..LegacyRow::default()
        })
    }

    #[test]
    fn test_report_accounts_for_every_row() {
        let rows = vec![
            legacy("Dark", "(2017–2020)", "8.7", "384,577"),
            legacy("Dark", "(2017)", "8.5", "1,000"),
            legacy("Unrated", "(2001)", "", "5"),
            legacy("Too Good", "(2001)", "11", "5"),
            legacy("Ozark", "(2017–2022)", "8.4", "281,000"),
        ];
        let output = run_pipeline(RowSchema::Legacy, &rows, 2025);

        assert_eq!(output.report.raw_rows, 5);
        assert_eq!(output.report.missing_rating, 1);
        assert_eq!(output.report.duplicates_removed, 1);
        assert_eq!(output.report.rejected, 1);
        assert_eq!(
            output.report.rejections.get(RejectionReason::RatingOutOfRange),
            1
        );
        assert_eq!(output.report.records, 2);
        assert_eq!(output.report.dropped(), 3);
        assert_eq!(output.records[0].votes, 384_577);
    }

    #[test]
    fn test_reload_is_idempotent() {
        let rows = vec![legacy("Dark", "(2017)", "8.7", "1,000")];
        let mut catalog = Catalog::from_rows(
            RowSchema::Legacy,
            rows,
            PipelineOptions::new().with_current_year(2025),
        );
        let before = (catalog.records().to_vec(), catalog.views().clone());

        catalog.reload();

        assert_eq!(catalog.records(), before.0.as_slice());
        assert_eq!(catalog.views(), &before.1);
        assert_eq!(catalog.raw_rows().len(), 1);
    }

    #[test]
    fn test_from_field_maps_detects_layout() {
        let row: BTreeMap<String, String> = [
            ("title", "Dark"),
            ("start_year", "2017.0"),
            ("content_type", "TV Series"),
            ("genres_list", "['Crime', 'Drama']"),
            ("rating_numeric", "8.7"),
            ("votes_numeric", "384577.0"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let catalog = Catalog::from_field_maps(&[row], PipelineOptions::new().with_current_year(2025));

        assert_eq!(catalog.schema(), RowSchema::Cleaned);
        assert_eq!(catalog.records().len(), 1);
        assert_eq!(catalog.records()[0].year, Some(2017));
        assert!(catalog.views().cleaned.is_some());
        assert!(catalog.origin().is_none());
    }
}
