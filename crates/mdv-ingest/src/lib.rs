//! Upload ingestion for master-data validation.
//!
//! Reads a spreadsheet export (CSV, UTF-8) into [`Row`]s keyed by the trimmed
//! header names. Every value is read as text; interpretation is left to the
//! field rules.

pub mod csv;
pub mod error;
pub mod rows;

use std::path::Path;

use mdv_model::Row;

pub use error::{IngestError, Result};
pub use rows::{any_to_string, dataframe_to_rows};

/// Load an upload from disk.
///
/// A file with a header line and no data rows is a valid, empty upload.
pub fn read_upload(path: &Path) -> Result<Vec<Row>> {
    csv::check_file_size(path)?;
    csv::validate_encoding(path)?;
    let headers = csv::read_header(path)?;
    let df = csv::read_csv_table(path)?;
    if df.width() != headers.len() {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "header has {} columns but {} were read",
                headers.len(),
                df.width()
            ),
        });
    }
    let rows = dataframe_to_rows(&df, &headers)?;
    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "loaded upload"
    );
    Ok(rows)
}
