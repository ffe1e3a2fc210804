//! Entry points for callers: rules, validation and samples by category.

use tracing::{info, info_span};

use mdv_catalog::{Catalog, ColumnConfig};
use mdv_model::{CategoryListing, Row, SampleTemplate, ValidationOutcome};
use mdv_rules::{CoreError, RuleService, RuleSet};

use crate::engine;
use crate::sample;

/// Every call recomputes its rules from the catalog; nothing is cached.
pub struct MasterDataService<C: Catalog> {
    rules: RuleService<C>,
}

impl<C: Catalog> MasterDataService<C> {
    pub fn new(catalog: C, columns: ColumnConfig) -> Self {
        Self {
            rules: RuleService::new(catalog, columns),
        }
    }

    pub fn catalog(&self) -> &C {
        self.rules.catalog()
    }

    pub fn categories(&self) -> Result<Vec<CategoryListing>, CoreError> {
        self.rules.categories()
    }

    pub fn resolve_and_aggregate(&self, category: &str) -> Result<RuleSet, CoreError> {
        self.rules.instructions(category)
    }

    pub fn validate(&self, category: &str, rows: &[Row]) -> Result<ValidationOutcome, CoreError> {
        let _span = info_span!("validate", category, rows = rows.len()).entered();
        let rules = self.resolve_and_aggregate(category)?.unique();
        let outcome = engine::validate(rows, &rules);
        info!(
            rules = rules.len(),
            total = outcome.summary.total,
            valid = outcome.summary.valid,
            warning = outcome.summary.warning,
            error = outcome.summary.error,
            "validation complete"
        );
        Ok(outcome)
    }

    pub fn generate_sample(&self, category: &str) -> Result<SampleTemplate, CoreError> {
        let _span = info_span!("generate_sample", category).entered();
        let rules = self.resolve_and_aggregate(category)?.unique();
        let template = sample::generate_sample(&rules);
        info!(columns = template.headers.len(), "sample generated");
        Ok(template)
    }
}
