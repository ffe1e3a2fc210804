//! Rule aggregation across a category's candidate tables.
//!
//! Every candidate is handled independently. A table that is missing, cannot
//! be introspected, or fails to read is logged and skipped; the remaining
//! candidates still contribute. Only a store that is unreachable, whether
//! when listing tables or during a read, fails the whole aggregation.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use mdv_catalog::{Catalog, CatalogError, ColumnConfig, RawRecord, ReadQuery, TableName, find_column};
use mdv_model::FieldRule;

use crate::error::{CoreError, Result};
use crate::projection::project;
use crate::resolver::{Candidate, Resolution};
use crate::rule_set::RuleSet;

/// How a candidate table stores its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// Carries the full marker column set and holds one rule per row.
    Structured,
    /// A business table whose rules live in the legacy instruction table.
    Legacy,
}

/// Classify a table by its columns.
pub fn classify(columns: &[String], config: &ColumnConfig) -> TableShape {
    let structured = config
        .marker_set()
        .iter()
        .all(|marker| find_column(columns, marker).is_some());
    if structured {
        TableShape::Structured
    } else {
        TableShape::Legacy
    }
}

pub struct RuleAggregator<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    columns: &'a ColumnConfig,
}

impl<'a, C: Catalog + ?Sized> RuleAggregator<'a, C> {
    pub fn new(catalog: &'a C, columns: &'a ColumnConfig) -> Self {
        Self { catalog, columns }
    }

    pub fn aggregate_rules(&self, resolution: &Resolution) -> Result<RuleSet> {
        let known = self
            .catalog
            .known_tables()
            .map_err(|e| CoreError::from_catalog(&e))?;

        if resolution.is_fallback_only() {
            let set = RuleSet::new(self.read_whole_legacy(&known)?);
            self.report_duplicates(&set);
            return Ok(set);
        }

        let mut rules = Vec::new();
        let mut seen = BTreeSet::new();
        for candidate in &resolution.candidates {
            let Candidate::Structured(name) = candidate else {
                continue;
            };
            let Some(table) = TableName::resolve(name, &known) else {
                debug!(table = %name, "candidate table not in schema, skipping");
                continue;
            };
            // Names differing only in case resolve to one physical table.
            if !seen.insert(table.clone()) {
                debug!(table = %table, requested = %name, "table already aggregated, skipping");
                continue;
            }
            match self.contribution(&table, &known) {
                Ok(contributed) => {
                    debug!(table = %table, rules = contributed.len(), "table contributed rules");
                    rules.extend(contributed);
                }
                Err(error) if error.is_unavailable() => {
                    return Err(CoreError::from_catalog(&error));
                }
                Err(error) => {
                    warn!(table = %table, error = %error, "skipping rule table");
                }
            }
        }

        rules.sort_by(|a, b| a.field_name.cmp(&b.field_name));
        let set = RuleSet::new(rules);
        self.report_duplicates(&set);
        Ok(set)
    }

    fn contribution(
        &self,
        table: &TableName,
        known: &BTreeSet<String>,
    ) -> std::result::Result<Vec<FieldRule>, CatalogError> {
        let columns = self.catalog.table_columns(table)?;
        match classify(&columns, self.columns) {
            TableShape::Structured => {
                debug!(table = %table, "structured rule table");
                let records = self.catalog.read_table(
                    table,
                    &ReadQuery::all().order_by(&self.columns.field_name),
                )?;
                Ok(self.project_all(&records, |_| table.as_str()))
            }
            TableShape::Legacy => {
                let legacy = self.catalog.legacy_table();
                if !known.contains(legacy.as_str()) {
                    debug!(table = %table, legacy = %legacy, "legacy instruction table missing");
                    return Ok(Vec::new());
                }
                debug!(table = %table, legacy = %legacy, "reading legacy instructions");
                let records = self.catalog.read_table(
                    legacy,
                    &ReadQuery::all()
                        .filter_eq(&self.columns.table_discriminator, table.as_str())
                        .order_by(&self.columns.field_name),
                )?;
                Ok(self.project_all(&records, |_| table.as_str()))
            }
        }
    }

    /// The fallback path: every legacy instruction, ordered by owning table
    /// then field name.
    fn read_whole_legacy(&self, known: &BTreeSet<String>) -> Result<Vec<FieldRule>> {
        let legacy = self.catalog.legacy_table();
        if !known.contains(legacy.as_str()) {
            debug!(legacy = %legacy, "legacy instruction table missing, no rules");
            return Ok(Vec::new());
        }
        let query = ReadQuery::all()
            .order_by(&self.columns.table_discriminator)
            .order_by(&self.columns.field_name);
        match self.catalog.read_table(legacy, &query) {
            Ok(records) => {
                let discriminator = self.columns.table_discriminator.as_str();
                Ok(self.project_all(&records, |record| {
                    owning_table(record, discriminator).unwrap_or(legacy.as_str())
                }))
            }
            Err(error) if error.is_unavailable() => Err(CoreError::from_catalog(&error)),
            Err(error) => {
                warn!(legacy = %legacy, error = %error, "failed to read legacy instructions");
                Ok(Vec::new())
            }
        }
    }

    fn project_all<'r, F>(&self, records: &'r [RawRecord], source: F) -> Vec<FieldRule>
    where
        F: Fn(&'r RawRecord) -> &'r str,
    {
        records
            .iter()
            .enumerate()
            .filter_map(|(idx, record)| {
                let source_table = source(record);
                match project(record, self.columns, source_table) {
                    Ok(rule) => Some(rule),
                    Err(reason) => {
                        warn!(table = source_table, row = idx + 1, %reason, "skipping malformed rule row");
                        None
                    }
                }
            })
            .collect()
    }

    fn report_duplicates(&self, set: &RuleSet) {
        for field in &set.duplicates {
            let sources: Vec<&str> = set
                .rules
                .iter()
                .filter(|rule| &rule.field_name == field)
                .map(|rule| rule.source_table.as_str())
                .collect();
            warn!(field = %field, sources = ?sources, "duplicate field rule, last source wins");
        }
    }
}

fn owning_table<'r>(record: &'r RawRecord, discriminator: &str) -> Option<&'r str> {
    record
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(discriminator))
        .and_then(|(_, value)| value.as_deref())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
