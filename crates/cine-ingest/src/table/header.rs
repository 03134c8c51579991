//! Header normalization and named access to table rows.

use std::collections::BTreeMap;

use cine_model::{FieldSource, RawRow, RowSchema};

/// Normalizes a header value: strips a byte-order mark and surrounding
/// whitespace, collapses inner runs of whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A CSV source held in memory: headers plus string cells.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Lowercased header to column index; the first occurrence wins.
    index: BTreeMap<String, usize>,
}

impl SourceTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut index = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            index.entry(header.to_lowercase()).or_insert(idx);
        }
        Self {
            headers,
            rows,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column index of a header, case-insensitively.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.index.get(&name.to_lowercase()).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.rows.iter().map(|cells| TableRow { table: self, cells })
    }

    /// Layout implied by the headers.
    pub fn detect_schema(&self) -> RowSchema {
        RowSchema::detect(&self.headers)
    }

    /// Decode every row with the given layout.
    pub fn decode(&self, schema: RowSchema) -> Vec<RawRow> {
        self.rows().map(|row| schema.decode(&row)).collect()
    }
}

/// One row of a [`SourceTable`], addressable by header name.
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    table: &'a SourceTable,
    cells: &'a [String],
}

impl FieldSource for TableRow<'_> {
    fn field(&self, name: &str) -> Option<&str> {
        let idx = self.table.column(name)?;
        // Short rows read as missing trailing cells.
        Some(self.cells.get(idx).map_or("", String::as_str))
    }
}
