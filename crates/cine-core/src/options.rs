//! Pipeline configuration.

use chrono::Datelike;
use cine_ingest::MAX_CSV_FILE_SIZE;
use cine_model::RowSchema;

/// How the input layout is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaChoice {
    /// Detect from the header names.
    #[default]
    Auto,
    Legacy,
    Cleaned,
}

impl SchemaChoice {
    /// The forced layout, if any.
    pub fn forced(self) -> Option<RowSchema> {
        match self {
            Self::Auto => None,
            Self::Legacy => Some(RowSchema::Legacy),
            Self::Cleaned => Some(RowSchema::Cleaned),
        }
    }
}

/// Options for loading and processing a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub schema: SchemaChoice,
    /// Year used by the release year check. `None` reads the local clock.
    pub current_year: Option<i32>,
    /// Sources larger than this are refused.
    pub max_file_size: u64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            schema: SchemaChoice::Auto,
            current_year: None,
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_schema(mut self, schema: SchemaChoice) -> Self {
        self.schema = schema;
        self
    }

    #[must_use]
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// The configured year, or this year on the local clock.
    pub fn resolved_year(&self) -> i32 {
        self.current_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PipelineOptions::default();
        assert_eq!(options.schema, SchemaChoice::Auto);
        assert_eq!(options.current_year, None);
        assert_eq!(options.max_file_size, MAX_CSV_FILE_SIZE);
        assert!(options.resolved_year() >= 2024);
    }

    #[test]
    fn test_builder() {
        let options = PipelineOptions::new()
            .with_schema(SchemaChoice::Cleaned)
            .with_current_year(2021)
            .with_max_file_size(1024);

        assert_eq!(options.schema.forced(), Some(RowSchema::Cleaned));
        assert_eq!(options.resolved_year(), 2021);
        assert_eq!(options.max_file_size, 1024);
        assert_eq!(SchemaChoice::Auto.forced(), None);
    }
}
