use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Write a header row and data rows to `path`, returning the data row count.
pub fn write_csv_table<H, I>(path: &Path, headers: &[H], rows: I) -> Result<usize>
where
    H: AsRef<str>,
    I: IntoIterator<Item = Vec<String>>,
{
    let write_error = |message: String| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message,
    };
    let mut writer = WriterBuilder::new()
        .flexible(false)
        .from_path(path)
        .map_err(|e| write_error(e.to_string()))?;

    writer
        .write_record(headers.iter().map(|header| header.as_ref()))
        .map_err(|e| write_error(e.to_string()))?;
    let mut count = 0usize;
    for row in rows {
        writer
            .write_record(&row)
            .map_err(|e| write_error(e.to_string()))?;
        count += 1;
    }
    writer.flush().map_err(|e| write_error(e.to_string()))?;

    debug!(path = %path.display(), rows = count, "csv written");
    Ok(count)
}
