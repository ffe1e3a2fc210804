//! Projection of stored rule rows into [`FieldRule`]s.

use std::fmt;

use mdv_catalog::{ColumnConfig, RawRecord};
use mdv_model::{DataType, FieldRule, ModelError, parse_length, parse_mandatory, parse_valid_values};

/// Why a stored rule row could not be projected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    BlankFieldName,
    Attribute { field: String, error: ModelError },
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::BlankFieldName => write!(f, "blank field name"),
            Malformed::Attribute { field, error } => write!(f, "{field}: {error}"),
        }
    }
}

/// Non-blank value of `column`, matched case-insensitively against the
/// record's own column spelling.
fn value<'a>(record: &'a RawRecord, column: &str) -> Option<&'a str> {
    record
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(column))
        .and_then(|(_, value)| value.as_deref())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Project one stored row.
///
/// A blank data type is read as `String`; a blank target field name defaults
/// to the field name.
pub fn project(
    record: &RawRecord,
    columns: &ColumnConfig,
    source_table: &str,
) -> Result<FieldRule, Malformed> {
    let field_name = value(record, &columns.field_name)
        .ok_or(Malformed::BlankFieldName)?
        .to_string();
    let attribute = |error: ModelError| Malformed::Attribute {
        field: field_name.clone(),
        error,
    };

    let data_type = match value(record, &columns.data_type) {
        Some(raw) => raw.parse::<DataType>().map_err(attribute)?,
        None => DataType::String,
    };
    let length = parse_length(value(record, &columns.length).unwrap_or_default())
        .map_err(attribute)?;

    Ok(FieldRule {
        target_field_name: value(record, &columns.target_field_name)
            .unwrap_or(&field_name)
            .to_string(),
        description: value(record, &columns.description)
            .unwrap_or_default()
            .to_string(),
        data_type,
        length,
        mandatory: value(record, &columns.mandatory).is_some_and(parse_mandatory),
        valid_values: value(record, &columns.valid_values)
            .map(parse_valid_values)
            .unwrap_or_default(),
        related_table: value(record, &columns.related_table).map(String::from),
        remarks: value(record, &columns.remarks).map(String::from),
        source_table: source_table.to_string(),
        field_name,
    })
}
