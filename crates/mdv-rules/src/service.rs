use tracing::{debug, info, info_span};

use mdv_catalog::{Catalog, ColumnConfig};
use mdv_model::CategoryListing;

use crate::aggregator::RuleAggregator;
use crate::error::{CoreError, Result};
use crate::resolver::CategoryResolver;
use crate::rule_set::RuleSet;

/// Category listing and rule lookup over one catalog.
pub struct RuleService<C: Catalog> {
    catalog: C,
    columns: ColumnConfig,
}

impl<C: Catalog> RuleService<C> {
    pub fn new(catalog: C, columns: ColumnConfig) -> Self {
        Self { catalog, columns }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn columns(&self) -> &ColumnConfig {
        &self.columns
    }

    /// Every main category with its subcategories.
    pub fn categories(&self) -> Result<Vec<CategoryListing>> {
        let _span = info_span!("categories").entered();
        let main = self
            .catalog
            .main_categories()
            .map_err(|e| CoreError::from_catalog(&e))?;
        let mut listings = Vec::with_capacity(main.len());
        for category in main {
            let sub_categories = self
                .catalog
                .sub_categories_for(&category.name)
                .map_err(|e| CoreError::from_catalog(&e))?;
            listings.push(CategoryListing {
                category,
                sub_categories,
            });
        }
        debug!(count = listings.len(), "listed categories");
        Ok(listings)
    }

    /// Resolve a category and aggregate its rules.
    pub fn instructions(&self, category: &str) -> Result<RuleSet> {
        let _span = info_span!("instructions", category).entered();
        let resolution = CategoryResolver::new(&self.catalog).resolve_tables(category)?;
        let rules = RuleAggregator::new(&self.catalog, &self.columns).aggregate_rules(&resolution)?;
        info!(
            candidates = resolution.candidates.len(),
            rules = rules.len(),
            duplicates = rules.duplicates.len(),
            "aggregated rules"
        );
        Ok(rules)
    }
}
