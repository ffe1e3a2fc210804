//! DataFrame to [`Row`] conversion.

use polars::prelude::*;

use mdv_model::Row;

use crate::error::Result;

/// Converts a Polars `AnyValue` to a `String`. `Null` becomes empty.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "Y" } else { "N" }.to_string(),
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// One [`Row`] per DataFrame row, keyed by `headers` (positionally aligned
/// with the frame's columns). Empty cells are stored as `None`.
pub fn dataframe_to_rows(df: &DataFrame, headers: &[String]) -> Result<Vec<Row>> {
    let columns = df.get_columns();
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut row = Row::new();
        for (header, column) in headers.iter().zip(columns) {
            let value = any_to_string(column.get(idx)?);
            row.insert(header.clone(), (!value.is_empty()).then_some(value));
        }
        rows.push(row);
    }
    Ok(rows)
}
