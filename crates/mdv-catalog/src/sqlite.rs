//! SQLite-backed catalog.
//!
//! Category metadata lives in two tables with fixed column names:
//!
//! - main categories: `id`, `name`
//! - sub categories: `id`, `name`, `main_category_id`, `template_path`,
//!   `sample_path`, `data_table`
//!
//! Table names come from [`TableConfig`]. Introspection uses `sqlite_master`
//! and `pragma_table_info`; identifiers are quoted and every value is bound as
//! a parameter.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, params};
use tracing::{debug, info};

use mdv_model::{MainCategory, SubCategory};

use crate::catalog::Catalog;
use crate::config::{CatalogConfig, TableConfig};
use crate::error::{CatalogError, Result};
use crate::table::{RawRecord, ReadQuery, TableName, find_column, quote_identifier};

pub struct SqliteCatalog {
    db: Mutex<Connection>,
    main_categories: TableName,
    sub_categories: TableName,
    legacy: TableName,
}

impl SqliteCatalog {
    /// Open the configured database read-only.
    pub fn open(config: &CatalogConfig) -> Result<Self> {
        let path = config.database.as_path();
        if !path.is_file() {
            return Err(CatalogError::unavailable(format!(
                "database not found: {}",
                path.display()
            )));
        }
        let db = open_read_only(path)?;
        db.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
            .map_err(|e| CatalogError::unavailable(e.to_string()))?;
        info!(database = %path.display(), "opened catalog");
        Self::from_connection(db, &config.tables)
    }

    /// Wrap an existing connection (used by tests with in-memory databases).
    pub fn from_connection(db: Connection, tables: &TableConfig) -> Result<Self> {
        Ok(Self {
            db: Mutex::new(db),
            main_categories: TableName::trusted(&tables.main_categories)?,
            sub_categories: TableName::trusted(&tables.sub_categories)?,
            legacy: TableName::trusted(&tables.legacy_instructions)?,
        })
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>> {
        self.db
            .lock()
            .map_err(|_| CatalogError::unavailable("catalog connection lock poisoned"))
    }
}

fn open_read_only(path: &Path) -> Result<Connection> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| CatalogError::unavailable(format!("{}: {e}", path.display())))
}

fn value_to_string(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(v) => Some(v.to_string()),
        ValueRef::Real(v) => Some(v.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

impl Catalog for SqliteCatalog {
    fn main_categories(&self) -> Result<Vec<MainCategory>> {
        let db = self.connection()?;
        let sql = format!(
            "SELECT id, name FROM {} ORDER BY id",
            self.main_categories.quoted()
        );
        let mut stmt = db
            .prepare(&sql)
            .map_err(|e| CatalogError::unavailable(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MainCategory {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| CatalogError::query(self.main_categories.as_str(), e))?;
        Ok(rows)
    }

    fn sub_categories_for(&self, main_category: &str) -> Result<Vec<SubCategory>> {
        let db = self.connection()?;
        let sql = format!(
            "SELECT s.id, s.name, s.main_category_id, s.template_path, s.sample_path, s.data_table \
             FROM {sub} s JOIN {main} m ON m.id = s.main_category_id \
             WHERE m.name = ?1 ORDER BY s.id",
            sub = self.sub_categories.quoted(),
            main = self.main_categories.quoted(),
        );
        // Failing to query the category tables means the store cannot answer.
        let mut stmt = db
            .prepare(&sql)
            .map_err(|e| CatalogError::unavailable(e.to_string()))?;
        let rows = stmt
            .query_map(params![main_category], |row| {
                Ok(SubCategory {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    main_category_id: row.get(2)?,
                    template_path: row.get(3)?,
                    sample_path: row.get(4)?,
                    data_table: row.get(5)?,
                })
            })
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| CatalogError::unavailable(e.to_string()))?;
        debug!(category = main_category, count = rows.len(), "loaded sub categories");
        Ok(rows)
    }

    fn known_tables(&self) -> Result<BTreeSet<String>> {
        let db = self.connection()?;
        let mut stmt = db
            .prepare(
                "SELECT name FROM sqlite_master \
                 WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%'",
            )
            .map_err(|e| CatalogError::unavailable(e.to_string()))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .and_then(|rows| rows.collect::<rusqlite::Result<BTreeSet<_>>>())
            .map_err(|e| CatalogError::unavailable(e.to_string()))?;
        Ok(names)
    }

    fn table_exists(&self, table: &TableName) -> Result<bool> {
        let db = self.connection()?;
        let count: i64 = db
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master \
                 WHERE type IN ('table', 'view') AND name = ?1",
                params![table.as_str()],
                |row| row.get(0),
            )
            .map_err(|e| CatalogError::query(table.as_str(), e))?;
        Ok(count > 0)
    }

    fn table_columns(&self, table: &TableName) -> Result<Vec<String>> {
        let db = self.connection()?;
        let mut stmt = db
            .prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")
            .map_err(|e| CatalogError::query(table.as_str(), e))?;
        let columns = stmt
            .query_map(params![table.as_str()], |row| row.get::<_, String>(0))
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| CatalogError::query(table.as_str(), e))?;
        if columns.is_empty() {
            return Err(CatalogError::UnknownTable {
                name: table.to_string(),
            });
        }
        Ok(columns)
    }

    fn read_table(&self, table: &TableName, query: &ReadQuery) -> Result<Vec<RawRecord>> {
        let columns = self.table_columns(table)?;
        let column = |wanted: &str| -> Result<String> {
            find_column(&columns, wanted)
                .map(quote_identifier)
                .ok_or_else(|| CatalogError::UnknownColumn {
                    table: table.to_string(),
                    column: wanted.to_string(),
                })
        };

        let mut sql = format!("SELECT * FROM {}", table.quoted());
        let mut bound: Vec<&str> = Vec::new();
        if let Some((wanted, value)) = &query.filter {
            sql.push_str(&format!(" WHERE {} = ?1", column(wanted)?));
            bound.push(value.as_str());
        }
        if !query.order_by.is_empty() {
            let order = query
                .order_by
                .iter()
                .map(|wanted| column(wanted))
                .collect::<Result<Vec<_>>>()?;
            sql.push_str(&format!(" ORDER BY {}", order.join(", ")));
        }

        let db = self.connection()?;
        let mut stmt = db
            .prepare(&sql)
            .map_err(|e| CatalogError::query(table.as_str(), e))?;
        let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let records = stmt
            .query_map(rusqlite::params_from_iter(bound.iter()), |row| {
                let mut record = RawRecord::new();
                for (idx, name) in names.iter().enumerate() {
                    record.insert(name.clone(), value_to_string(row.get_ref(idx)?));
                }
                Ok(record)
            })
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| CatalogError::query(table.as_str(), e))?;
        debug!(table = %table, rows = records.len(), "read table");
        Ok(records)
    }

    fn legacy_table(&self) -> &TableName {
        &self.legacy
    }
}
