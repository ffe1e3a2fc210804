use std::collections::BTreeSet;

use mdv_model::{MainCategory, SubCategory};

use crate::error::Result;
use crate::table::{RawRecord, ReadQuery, TableName};

/// Read-only view of category metadata and the physical tables behind it.
///
/// Implementations must keep per-table failures scoped: an error from
/// [`table_columns`](Catalog::table_columns) or [`read_table`](Catalog::read_table)
/// describes that table only. [`CatalogError::Unavailable`](crate::CatalogError::Unavailable)
/// is reserved for a store that cannot answer at all.
pub trait Catalog: Send + Sync {
    fn main_categories(&self) -> Result<Vec<MainCategory>>;

    /// Subcategories whose parent category name equals `main_category`
    /// (case-sensitive), ordered by subcategory id ascending.
    fn sub_categories_for(&self, main_category: &str) -> Result<Vec<SubCategory>>;

    /// Every physical table in the active schema. This is the allow-list used
    /// to turn stored table names into [`TableName`]s.
    fn known_tables(&self) -> Result<BTreeSet<String>>;

    fn table_exists(&self, table: &TableName) -> Result<bool> {
        Ok(self.known_tables()?.contains(table.as_str()))
    }

    fn table_columns(&self, table: &TableName) -> Result<Vec<String>>;

    fn read_table(&self, table: &TableName, query: &ReadQuery) -> Result<Vec<RawRecord>>;

    /// The global legacy instruction table.
    fn legacy_table(&self) -> &TableName;

    /// Resolve a stored table reference against the allow-list.
    fn resolve_table(&self, name: &str) -> Result<Option<TableName>> {
        Ok(TableName::resolve(name, &self.known_tables()?))
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn main_categories(&self) -> Result<Vec<MainCategory>> {
        (**self).main_categories()
    }

    fn sub_categories_for(&self, main_category: &str) -> Result<Vec<SubCategory>> {
        (**self).sub_categories_for(main_category)
    }

    fn known_tables(&self) -> Result<BTreeSet<String>> {
        (**self).known_tables()
    }

    fn table_exists(&self, table: &TableName) -> Result<bool> {
        (**self).table_exists(table)
    }

    fn table_columns(&self, table: &TableName) -> Result<Vec<String>> {
        (**self).table_columns(table)
    }

    fn read_table(&self, table: &TableName, query: &ReadQuery) -> Result<Vec<RawRecord>> {
        (**self).read_table(table, query)
    }

    fn legacy_table(&self) -> &TableName {
        (**self).legacy_table()
    }

    fn resolve_table(&self, name: &str) -> Result<Option<TableName>> {
        (**self).resolve_table(name)
    }
}
