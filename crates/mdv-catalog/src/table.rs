//! Checked table identifiers and read queries.
//!
//! Table names arrive as data (a subcategory's `data_table` column). A
//! [`TableName`] can only be built from the catalog's own list of known tables
//! or from a configuration value that passes the identifier check, so no
//! caller-supplied string reaches a query unchecked.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{CatalogError, Result};

/// One raw record read from a table: column name to nullable text value.
pub type RawRecord = BTreeMap<String, Option<String>>;

/// A table identifier that has passed the allow-list or identifier check.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableName(String);

impl TableName {
    /// Look up `name` in the catalog's known tables.
    ///
    /// Exact matches win. Otherwise a single case-insensitive match is accepted
    /// and the catalog's own spelling is returned.
    pub fn resolve(name: &str, known: &BTreeSet<String>) -> Option<Self> {
        let name = name.trim();
        if known.contains(name) {
            return Some(Self(name.to_string()));
        }
        let mut matches = known
            .iter()
            .filter(|candidate| candidate.eq_ignore_ascii_case(name));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(Self(first.clone()))
    }

    /// Accept a name from configuration. Only plain identifiers pass.
    pub fn trusted(name: &str) -> Result<Self> {
        let name = name.trim();
        if is_plain_identifier(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(CatalogError::InvalidIdentifier {
                name: name.to_string(),
            })
        }
    }

    /// Names the catalog itself vouches for, e.g. rows of `sqlite_master`.
    pub(crate) fn from_catalog(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// SQL-quoted form of the identifier.
    pub fn quoted(&self) -> String {
        quote_identifier(&self.0)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Find a column by name (case-insensitive), returning the table's spelling.
pub fn find_column<'a>(columns: &'a [String], wanted: &str) -> Option<&'a str> {
    columns
        .iter()
        .find(|column| column.eq_ignore_ascii_case(wanted))
        .map(String::as_str)
}

/// Filter and ordering for [`Catalog::read_table`](crate::Catalog::read_table).
///
/// Column names are logical; implementations match them against the table's
/// introspected columns before use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadQuery {
    pub filter: Option<(String, String)>,
    pub order_by: Vec<String>,
}

impl ReadQuery {
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter_eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = Some((column.into(), value.into()));
        self
    }

    #[must_use]
    pub fn order_by(mut self, column: impl Into<String>) -> Self {
        self.order_by.push(column.into());
        self
    }
}
