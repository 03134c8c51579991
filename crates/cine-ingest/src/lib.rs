//! Catalog ingestion utilities.
//!
//! This crate reads catalog CSV files and decodes their rows into the
//! [`RawRow`](cine_model::RawRow) variant matching the file's layout.
//!
//! # Features
//!
//! - **CSV Loading**: UTF-8 check, size limit, BOM-tolerant headers, blank-row skipping
//! - **Schema Detection**: legacy vs pre-cleaned layout from header names
//! - **Field Lookup**: case-insensitive named access to each row
//! - **CSV Output**: writing tables such as the pre-cleaned catalog
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cine_ingest::{MAX_CSV_FILE_SIZE, read_raw_source};
//!
//! let source = read_raw_source(Path::new("data/n_movies.csv"), MAX_CSV_FILE_SIZE, None)?;
//! println!("{} rows, {} layout", source.rows.len(), source.schema);
//! ```

mod error;
mod source;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading/Writing ===
pub use table::{
    MAX_CSV_FILE_SIZE, SourceTable, TableRow, check_file_size, check_file_size_with_limit,
    normalize_header, parse_source_table, read_source_table, validate_encoding, write_csv_table,
};

// === Decoded Sources ===
pub use source::{RawSource, read_raw_source};
