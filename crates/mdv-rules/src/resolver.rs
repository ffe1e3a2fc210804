//! Category name to candidate rule tables.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info};

use mdv_catalog::Catalog;

use crate::error::{CoreError, Result};

/// One candidate rule source for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "table", rename_all = "kebab-case")]
pub enum Candidate {
    /// A table referenced by a subcategory's `data_table`. The name is a soft
    /// reference and has not been checked against the schema yet.
    Structured(String),
    /// The global legacy instruction table, used when nothing is mapped.
    LegacyFallback,
}

/// Ordered candidate tables for a category. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub category: String,
    pub candidates: Vec<Candidate>,
}

impl Resolution {
    fn fallback(category: &str) -> Self {
        Self {
            category: category.to_string(),
            candidates: vec![Candidate::LegacyFallback],
        }
    }

    /// True when the only candidate is the legacy fallback sentinel.
    pub fn is_fallback_only(&self) -> bool {
        matches!(self.candidates.as_slice(), [Candidate::LegacyFallback])
    }

    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().filter_map(|candidate| match candidate {
            Candidate::Structured(table) => Some(table.as_str()),
            Candidate::LegacyFallback => None,
        })
    }
}

pub struct CategoryResolver<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: Catalog + ?Sized> CategoryResolver<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Resolve a category to its candidate tables.
    ///
    /// An unknown category, or one whose subcategories reference no table,
    /// resolves to the legacy fallback. Only a catalog that cannot list
    /// subcategories at all is an error.
    pub fn resolve_tables(&self, category: &str) -> Result<Resolution> {
        let sub_categories = self
            .catalog
            .sub_categories_for(category)
            .map_err(|e| CoreError::from_catalog(&e))?;

        let mut seen = BTreeSet::new();
        let mut candidates = Vec::new();
        for sub in &sub_categories {
            let Some(table) = sub.data_table_name() else {
                debug!(sub_category = %sub.name, "sub category has no data table");
                continue;
            };
            if seen.insert(table.to_string()) {
                candidates.push(Candidate::Structured(table.to_string()));
            }
        }

        if candidates.is_empty() {
            info!(
                category,
                sub_categories = sub_categories.len(),
                "no mapped tables, using legacy instructions"
            );
            return Ok(Resolution::fallback(category));
        }

        debug!(category, candidates = candidates.len(), "resolved category");
        Ok(Resolution {
            category: category.to_string(),
            candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdv_catalog::InMemoryCatalog;
    use mdv_model::SubCategory;

    fn sub(id: i64, parent: i64, table: Option<&str>) -> SubCategory {
        SubCategory {
            id,
            name: format!("sub-{id}"),
            main_category_id: parent,
            template_path: None,
            sample_path: None,
            data_table: table.map(String::from),
        }
    }

    #[test]
    fn collects_tables_in_sub_category_order_without_duplicates() {
        let catalog = InMemoryCatalog::new()
            .with_main_category(1, "Items")
            .with_sub_category(sub(5, 1, Some("OITM")))
            .with_sub_category(sub(2, 1, Some("ITM1")))
            .with_sub_category(sub(9, 1, Some("OITM")))
            .with_sub_category(sub(3, 2, Some("OCRD")));
        let resolution = CategoryResolver::new(&catalog)
            .resolve_tables("Items")
            .unwrap();
        assert_eq!(
            resolution.candidates,
            vec![
                Candidate::Structured("ITM1".to_string()),
                Candidate::Structured("OITM".to_string()),
            ]
        );
        assert!(!resolution.is_fallback_only());
    }

    #[test]
    fn unknown_category_falls_back() {
        let catalog = InMemoryCatalog::new().with_main_category(1, "Items");
        let resolution = CategoryResolver::new(&catalog)
            .resolve_tables("Finance")
            .unwrap();
        assert!(resolution.is_fallback_only());
        assert_eq!(resolution.tables().count(), 0);
    }

    #[test]
    fn blank_data_tables_fall_back() {
        let catalog = InMemoryCatalog::new()
            .with_main_category(1, "Items")
            .with_sub_category(sub(1, 1, None))
            .with_sub_category(sub(2, 1, Some("  ")));
        let resolution = CategoryResolver::new(&catalog)
            .resolve_tables("Items")
            .unwrap();
        assert!(resolution.is_fallback_only());
    }

    #[test]
    fn unavailable_store_is_an_error() {
        let catalog = InMemoryCatalog::new().unavailable();
        let result = CategoryResolver::new(&catalog).resolve_tables("Items");
        assert!(matches!(result, Err(CoreError::StoreUnavailable { .. })));
    }
}
