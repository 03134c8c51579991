use serde::{Deserialize, Serialize};

use crate::raw::RowSchema;
use crate::rejection::RejectionCounts;

/// What happened to the rows of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Layout the source was decoded with.
    pub schema: RowSchema,
    /// Rows read from the source.
    pub raw_rows: usize,
    /// Rows dropped by the normalizer because the rating was unusable.
    pub missing_rating: usize,
    /// Records replaced or dropped by deduplication.
    pub duplicates_removed: usize,
    /// Records excluded by the outlier filter.
    pub rejected: usize,
    /// Reasons behind `rejected`, counted independently.
    pub rejections: RejectionCounts,
    /// Records in the final clean set.
    pub records: usize,
}

impl PipelineReport {
    pub fn new(schema: RowSchema) -> Self {
        Self {
            schema,
            raw_rows: 0,
            missing_rating: 0,
            duplicates_removed: 0,
            rejected: 0,
            rejections: RejectionCounts::default(),
            records: 0,
        }
    }

    /// Rows that did not make it into the clean set.
    pub fn dropped(&self) -> usize {
        self.missing_rating + self.duplicates_removed + self.rejected
    }
}
