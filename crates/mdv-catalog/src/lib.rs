#![deny(unsafe_code)]

//! Read-only access to category metadata and the tables that hold field rules.

pub mod catalog;
pub mod config;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod table;

pub use crate::catalog::Catalog;
pub use crate::config::{CatalogConfig, ColumnConfig, TableConfig};
pub use crate::error::{CatalogError, Result};
pub use crate::memory::InMemoryCatalog;
pub use crate::sqlite::SqliteCatalog;
pub use crate::table::{RawRecord, ReadQuery, TableName, find_column};
