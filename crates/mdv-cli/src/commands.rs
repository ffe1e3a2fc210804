//! Command implementations. Each returns data; printing is left to the caller.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span, trace};

use mdv_catalog::{CatalogConfig, SqliteCatalog};
use mdv_model::{CategoryListing, RowStatus, SampleTemplate};
use mdv_validate::{MasterDataService, RuleSet, ValidationReport};

use crate::logging::redact_value;

pub type Service = MasterDataService<SqliteCatalog>;

/// Load the catalog configuration and open the database.
pub fn open_service(config_path: Option<&Path>) -> Result<Service> {
    let config = CatalogConfig::discover(config_path).context("load catalog config")?;
    debug!(database = %config.database.display(), "catalog config loaded");
    let catalog = SqliteCatalog::open(&config)
        .with_context(|| format!("open catalog {}", config.database.display()))?;
    Ok(MasterDataService::new(catalog, config.columns))
}

pub fn run_categories(service: &Service) -> Result<Vec<CategoryListing>> {
    service.categories().context("list categories")
}

pub fn run_instructions(service: &Service, category: &str) -> Result<RuleSet> {
    service
        .resolve_and_aggregate(category)
        .with_context(|| format!("load rules for '{category}'"))
}

pub fn run_validate(service: &Service, category: &str, file: &Path) -> Result<ValidationReport> {
    let span = info_span!("upload", file = %file.display());
    let _guard = span.enter();
    let rows = mdv_ingest::read_upload(file)
        .with_context(|| format!("read upload {}", file.display()))?;
    let outcome = service
        .validate(category, &rows)
        .with_context(|| format!("validate against '{category}'"))?;
    for result in outcome.results.iter().filter(|r| r.status != RowStatus::Valid) {
        trace!(
            row = result.row_number,
            code = redact_value(&result.code),
            fields = ?result.fields_with_issues,
            "row failed validation"
        );
    }
    Ok(ValidationReport::new(category, outcome).with_source(file.display().to_string()))
}

pub fn run_sample(service: &Service, category: &str) -> Result<SampleTemplate> {
    service
        .generate_sample(category)
        .with_context(|| format!("generate sample for '{category}'"))
}
