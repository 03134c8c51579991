//! Error type for the catalog pipeline boundary.

use std::path::PathBuf;

use cine_ingest::IngestError;
use thiserror::Error;

/// The only failure a catalog load reports.
///
/// Per-field parse problems and validation rejections never surface here;
/// they are recovered or counted inside the pipeline.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read or held no usable table.
    #[error("catalog source unavailable: {origin}")]
    SourceUnavailable {
        origin: PathBuf,
        #[source]
        source: IngestError,
    },
}

impl LoadError {
    pub fn origin(&self) -> &std::path::Path {
        match self {
            Self::SourceUnavailable { origin, .. } => origin,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
