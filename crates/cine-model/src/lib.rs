//! Catalog data model.
//!
//! Types shared by every stage of the catalog pipeline:
//!
//! - **Raw rows**: [`RawRow`] is the tagged union of the two recognized input
//!   layouts, resolved once at ingestion via [`RowSchema::detect`].
//! - **Records**: [`Record`] is one canonical, validated title entry.
//! - **Views**: [`AggregateViews`] holds the derived summaries consumed by
//!   rendering.
//! - **Diagnostics**: [`PipelineReport`] and [`RejectionCounts`] explain what
//!   was dropped and why.

pub mod raw;
pub mod record;
pub mod rejection;
pub mod report;
pub mod views;

pub use raw::{CleanedRow, FieldSource, LegacyRow, RawRow, RowSchema};
pub use record::{ContentType, Record, UNKNOWN_GENRE};
pub use rejection::{RejectionCounts, RejectionReason};
pub use report::PipelineReport;
pub use views::{
    AggregateViews, CleanedSchemaViews, ContentTypeCount, DataQuality, DecadeCount,
    DurationRatingView, HistogramBin, OverviewStats, RankEntry, Regression,
};
