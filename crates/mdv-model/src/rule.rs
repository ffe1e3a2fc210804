//! Canonical field rules.
//!
//! Rule tables store every attribute as text. The helpers in this module turn
//! those stored strings into typed values; anything they reject marks the whole
//! rule row as malformed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Declared data type of a field.
///
/// Only `Integer` carries an enforced type check during validation. The other
/// types are informational and drive sample generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Char,
    Integer,
    String,
    Decimal,
    Date,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Char => "Char",
            DataType::Integer => "Integer",
            DataType::String => "String",
            DataType::Decimal => "Decimal",
            DataType::Date => "Date",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ModelError;

    /// Parse a stored data type name (case-insensitive, common SQL aliases accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "char" | "alpha" | "alphanumeric" => Ok(DataType::Char),
            "integer" | "int" | "number" | "numeric(int)" => Ok(DataType::Integer),
            "string" | "text" | "varchar" | "nvarchar" => Ok(DataType::String),
            "decimal" | "numeric" | "float" | "double" | "amount" => Ok(DataType::Decimal),
            "date" | "datetime" | "timestamp" => Ok(DataType::Date),
            _ => Err(ModelError::UnknownDataType(s.to_string())),
        }
    }
}

/// Canonical validation rule for one field, produced by rule aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    /// Source field identifier; the column name expected in uploaded rows.
    pub field_name: String,
    pub target_field_name: String,
    pub description: String,
    pub data_type: DataType,
    /// Maximum value length in characters. `0` means unbounded.
    pub length: u32,
    pub mandatory: bool,
    /// Allowed literal values in their stored order. Empty means unrestricted.
    #[serde(default)]
    pub valid_values: Vec<String>,
    pub related_table: Option<String>,
    pub remarks: Option<String>,
    /// Physical table this rule was read from.
    pub source_table: String,
}

impl FieldRule {
    /// A minimal rule with no restrictions, mostly useful for tests and demos.
    pub fn new(field_name: impl Into<String>, data_type: DataType) -> Self {
        let field_name = field_name.into();
        Self {
            target_field_name: field_name.clone(),
            field_name,
            description: String::new(),
            data_type,
            length: 0,
            mandatory: false,
            valid_values: Vec::new(),
            related_table: None,
            remarks: None,
            source_table: String::new(),
        }
    }

    #[must_use]
    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn with_valid_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_values = values.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_source_table(mut self, table: impl Into<String>) -> Self {
        self.source_table = table.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn has_valid_values(&self) -> bool {
        !self.valid_values.is_empty()
    }
}

/// Parse a stored mandatory flag. Unrecognized text means "not mandatory".
pub fn parse_mandatory(raw: &str) -> bool {
    matches!(
        raw.trim().to_uppercase().as_str(),
        "Y" | "YES" | "TRUE" | "1" | "M" | "MANDATORY"
    )
}

/// Parse a stored field length. Blank means unbounded (`0`).
pub fn parse_length(raw: &str) -> Result<u32, ModelError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| ModelError::InvalidLength(raw.to_string()))
}

/// Split a stored list of allowed values, keeping order and dropping blanks.
pub fn parse_valid_values(raw: &str) -> Vec<String> {
    raw.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
        .collect()
}
