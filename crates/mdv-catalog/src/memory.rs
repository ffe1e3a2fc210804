//! In-memory catalog for tests and demos.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use mdv_model::{MainCategory, SubCategory};

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::table::{RawRecord, ReadQuery, TableName, find_column};

#[derive(Debug, Clone, Default)]
struct MemoryTable {
    columns: Vec<String>,
    rows: Vec<RawRecord>,
}

/// A [`Catalog`] backed by plain collections.
///
/// Tables registered with [`failing_table`](InMemoryCatalog::failing_table)
/// exist in the schema but fail every read, which lets tests exercise the
/// per-table skip path.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    main_categories: Vec<MainCategory>,
    sub_categories: Vec<SubCategory>,
    tables: BTreeMap<String, MemoryTable>,
    failing: BTreeSet<String>,
    offline: BTreeSet<String>,
    legacy: TableName,
    unavailable: bool,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            main_categories: Vec::new(),
            sub_categories: Vec::new(),
            tables: BTreeMap::new(),
            failing: BTreeSet::new(),
            offline: BTreeSet::new(),
            legacy: TableName::from_catalog("instructions"),
            unavailable: false,
        }
    }

    /// Use a different legacy instruction table name.
    pub fn with_legacy_table(mut self, name: &str) -> Result<Self> {
        self.legacy = TableName::trusted(name)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_main_category(mut self, id: i64, name: &str) -> Self {
        self.main_categories.push(MainCategory {
            id,
            name: name.to_string(),
        });
        self
    }

    #[must_use]
    pub fn with_sub_category(mut self, sub_category: SubCategory) -> Self {
        self.sub_categories.push(sub_category);
        self
    }

    /// Register a table. Each row is given as `(column, value)` pairs; an empty
    /// value is stored as `NULL`.
    #[must_use]
    pub fn with_table(mut self, name: &str, columns: &[&str], rows: &[&[(&str, &str)]]) -> Self {
        let records = rows
            .iter()
            .map(|row| {
                let mut record: RawRecord = columns
                    .iter()
                    .map(|column| ((*column).to_string(), None))
                    .collect();
                for (column, value) in row.iter() {
                    let value = if value.is_empty() {
                        None
                    } else {
                        Some((*value).to_string())
                    };
                    record.insert((*column).to_string(), value);
                }
                record
            })
            .collect();
        self.tables.insert(
            name.to_string(),
            MemoryTable {
                columns: columns.iter().map(|column| (*column).to_string()).collect(),
                rows: records,
            },
        );
        self
    }

    /// Register a table that exists but fails every column or row read.
    #[must_use]
    pub fn failing_table(mut self, name: &str, columns: &[&str]) -> Self {
        self = self.with_table(name, columns, &[]);
        self.failing.insert(name.to_string());
        self
    }

    /// Register a table whose reads fail as if the store went down mid-request.
    #[must_use]
    pub fn offline_table(mut self, name: &str, columns: &[&str]) -> Self {
        self = self.with_table(name, columns, &[]);
        self.offline.insert(name.to_string());
        self
    }

    /// Make every call fail as if the store were down.
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(CatalogError::unavailable("in-memory catalog marked unavailable"));
        }
        Ok(())
    }

    fn table(&self, table: &TableName) -> Result<&MemoryTable> {
        self.check_available()?;
        if self.offline.contains(table.as_str()) {
            return Err(CatalogError::unavailable(format!("{table} went offline")));
        }
        if self.failing.contains(table.as_str()) {
            return Err(CatalogError::Read {
                table: table.to_string(),
                message: "simulated read failure".to_string(),
            });
        }
        self.tables
            .get(table.as_str())
            .ok_or_else(|| CatalogError::UnknownTable {
                name: table.to_string(),
            })
    }
}

impl Catalog for InMemoryCatalog {
    fn main_categories(&self) -> Result<Vec<MainCategory>> {
        self.check_available()?;
        let mut categories = self.main_categories.clone();
        categories.sort_by_key(|category| category.id);
        Ok(categories)
    }

    fn sub_categories_for(&self, main_category: &str) -> Result<Vec<SubCategory>> {
        self.check_available()?;
        let parent_ids: BTreeSet<i64> = self
            .main_categories
            .iter()
            .filter(|category| category.name == main_category)
            .map(|category| category.id)
            .collect();
        let mut matched: Vec<SubCategory> = self
            .sub_categories
            .iter()
            .filter(|sub| parent_ids.contains(&sub.main_category_id))
            .cloned()
            .collect();
        matched.sort_by_key(|sub| sub.id);
        Ok(matched)
    }

    fn known_tables(&self) -> Result<BTreeSet<String>> {
        self.check_available()?;
        Ok(self.tables.keys().cloned().collect())
    }

    fn table_columns(&self, table: &TableName) -> Result<Vec<String>> {
        Ok(self.table(table)?.columns.clone())
    }

    fn read_table(&self, table: &TableName, query: &ReadQuery) -> Result<Vec<RawRecord>> {
        let stored = self.table(table)?;
        let column = |wanted: &str| -> Result<String> {
            find_column(&stored.columns, wanted)
                .map(String::from)
                .ok_or_else(|| CatalogError::UnknownColumn {
                    table: table.to_string(),
                    column: wanted.to_string(),
                })
        };

        let mut rows: Vec<RawRecord> = match &query.filter {
            Some((wanted, value)) => {
                let name = column(wanted)?;
                stored
                    .rows
                    .iter()
                    .filter(|row| row.get(&name).and_then(Option::as_deref) == Some(value.as_str()))
                    .cloned()
                    .collect()
            }
            None => stored.rows.clone(),
        };

        let order: Vec<String> = query
            .order_by
            .iter()
            .map(|wanted| column(wanted))
            .collect::<Result<_>>()?;
        rows.sort_by(|left, right| {
            for name in &order {
                let ordering = left.get(name).cmp(&right.get(name));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });
        Ok(rows)
    }

    fn legacy_table(&self) -> &TableName {
        &self.legacy
    }
}
