//! Catalog pipeline.
//!
//! Ties the other crates together: rows are read and decoded
//! (`cine-ingest`), normalized (`cine-transform`), deduplicated and validated
//! here, then summarized (`cine-aggregate`). The result is a read-only
//! [`Catalog`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cine_core::{PipelineOptions, load_catalog};
//!
//! let catalog = load_catalog(Path::new("data/n_movies.csv"), PipelineOptions::default())?;
//! println!("{} titles", catalog.records().len());
//! ```

pub mod dedupe;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod validate;

pub use dedupe::{dedupe_key, dedupe_records};
pub use error::{LoadError, Result};
pub use options::{PipelineOptions, SchemaChoice};
pub use pipeline::{Catalog, PipelineOutput, load_catalog, run_pipeline};
pub use validate::{Validation, rejection_reasons, validate_records};
