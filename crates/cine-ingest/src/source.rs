//! Decoded catalog sources.

use std::path::{Path, PathBuf};

use cine_model::{LegacyRow, RawRow, RowSchema};
use tracing::info;

use crate::error::Result;
use crate::table::read_source_table;

/// Every row of one source, decoded with a single layout.
#[derive(Debug, Clone)]
pub struct RawSource {
    pub origin: PathBuf,
    pub schema: RowSchema,
    pub rows: Vec<RawRow>,
}

impl RawSource {
    /// Legacy rows only; pre-cleaned rows are skipped.
    pub fn legacy_rows(&self) -> Vec<LegacyRow> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                RawRow::Legacy(row) => Some(row.clone()),
                RawRow::Cleaned(_) => None,
            })
            .collect()
    }
}

/// Read and decode a catalog CSV.
///
/// `schema` forces a layout; `None` detects it from the headers.
pub fn read_raw_source(
    path: &Path,
    max_size: u64,
    schema: Option<RowSchema>,
) -> Result<RawSource> {
    let table = read_source_table(path, max_size)?;
    let detected = table.detect_schema();
    let schema = schema.unwrap_or(detected);
    info!(
        path = %path.display(),
        rows = table.len(),
        schema = %schema,
        detected = %detected,
        "source loaded"
    );
    Ok(RawSource {
        origin: path.to_path_buf(),
        schema,
        rows: table.decode(schema),
    })
}
