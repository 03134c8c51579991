//! CSV tables: reading, header lookup, writing.

mod header;
mod reader;
mod writer;

pub use header::{SourceTable, TableRow, normalize_header};
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, parse_source_table,
    read_source_table, validate_encoding,
};
pub use writer::write_csv_table;
