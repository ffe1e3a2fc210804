//! Error types for catalog access.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`Catalog`](crate::Catalog) implementation.
///
/// `Unavailable` is reserved for a store that cannot answer at all. Every other
/// variant is scoped to a single table and is expected to be skipped by callers.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The store cannot be reached or opened.
    #[error("catalog store unavailable: {message}")]
    Unavailable { message: String },

    /// A table name is not present in the active schema.
    #[error("unknown table: {name}")]
    UnknownTable { name: String },

    /// A table or column name failed the identifier check.
    #[error("invalid identifier '{name}'")]
    InvalidIdentifier { name: String },

    /// A column requested in a read is not part of the table.
    #[error("column '{column}' not found in table {table}")]
    UnknownColumn { table: String, column: String },

    /// A query against a specific table failed.
    #[error("query against {table} failed: {source}")]
    Query {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Simulated or non-SQL per-table failure.
    #[error("read of {table} failed: {message}")]
    Read { table: String, message: String },

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl CatalogError {
    pub(crate) fn query(table: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Query {
            table: table.into(),
            source,
        }
    }

    pub(crate) fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// True when the whole store is down, as opposed to a per-table gap.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
