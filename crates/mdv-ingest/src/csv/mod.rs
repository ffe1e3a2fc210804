//! CSV upload loading.

mod header;
mod reader;

pub use header::{normalize_header, parse_csv_line, read_header};
pub use reader::{
    MAX_UPLOAD_SIZE, check_file_size, check_file_size_with_limit, read_csv_table,
    validate_encoding,
};
