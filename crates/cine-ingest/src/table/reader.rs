//! CSV source loading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

use super::header::{SourceTable, normalize_header};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

/// Read a catalog CSV file into memory.
///
/// The file must be UTF-8, at most `max_size` bytes, and have a header row
/// followed by at least one non-blank data row.
pub fn read_source_table(path: &Path, max_size: u64) -> Result<SourceTable> {
    check_file_size_with_limit(path, max_size)?;
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    parse_source_table(BufReader::new(file), path)
}

/// Parse CSV text from any reader. `origin` is only used in errors and logs.
pub fn parse_source_table<R: Read>(reader: R, origin: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| parse_error(origin, &e))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: origin.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(origin, &e))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.len() != headers.len() {
            warn!(
                path = %origin.display(),
                line = record.position().map_or(0, csv::Position::line),
                expected = headers.len(),
                found = row.len(),
                "row width differs from header"
            );
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: origin.to_path_buf(),
        });
    }

    debug!(
        path = %origin.display(),
        columns = headers.len(),
        rows = rows.len(),
        blank_rows = skipped,
        "csv parsed"
    );
    Ok(SourceTable::new(headers, rows))
}

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

fn parse_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
