//! Catalog row transformation.
//!
//! Turns raw textual rows into canonical [`Record`](cine_model::Record)s.
//!
//! # Overview
//!
//! - **Field parsers** ([`normalization`]): pure functions from a raw cell to a
//!   typed value. Each one has a documented default on malformed input and
//!   never panics.
//! - **Record normalizer** ([`normalize_row`]): maps one [`RawRow`](cine_model::RawRow)
//!   of either layout to a record, dropping rows without a usable rating.
//! - **Offline cleaning** ([`clean_rows`]): converts legacy rows into the
//!   pre-cleaned layout (credits split, year spans, content type).
//!
//! # Example
//!
//! ```ignore
//! use cine_model::RowSchema;
//! use cine_transform::normalize_row;
//!
//! let raw = RowSchema::detect(&headers).decode(&fields);
//! if let Some(record) = normalize_row(&raw) {
//!     println!("{} ({:?})", record.title, record.year);
//! }
//! ```

mod cleaning;
mod normalizer;

pub mod normalization;

pub use cleaning::{CLEANED_COLUMNS, CleanedEntry, CleaningSummary, clean_rows, infer_content_type};
pub use normalizer::{normalize_cleaned, normalize_legacy, normalize_row};
