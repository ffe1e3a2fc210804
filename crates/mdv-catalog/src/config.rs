//! Catalog configuration loaded from TOML.
//!
//! ```toml
//! [catalog]
//! database = "masterdata.db"
//! busy_timeout_ms = 2000
//!
//! [catalog.tables]
//! legacy_instructions = "instructions"
//!
//! [catalog.columns]
//! length = "field_length"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "MDV_CONFIG";

/// Config file looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "mdv.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub database: PathBuf,
    /// Upper bound on how long a single store operation waits for a lock.
    pub busy_timeout_ms: u64,
    pub tables: TableConfig,
    pub columns: ColumnConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("masterdata.db"),
            busy_timeout_ms: 2000,
            tables: TableConfig::default(),
            columns: ColumnConfig::default(),
        }
    }
}

/// Names of the metadata tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub main_categories: String,
    pub sub_categories: String,
    /// Global legacy instruction table used as the fallback rule source.
    pub legacy_instructions: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            main_categories: "main_categories".to_string(),
            sub_categories: "sub_categories".to_string(),
            legacy_instructions: "instructions".to_string(),
        }
    }
}

/// Column names of rule-definition tables.
///
/// The first six form the marker set that classifies a table as structured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub field_name: String,
    pub target_field_name: String,
    pub description: String,
    pub data_type: String,
    pub length: String,
    pub mandatory: String,
    pub valid_values: String,
    pub related_table: String,
    pub remarks: String,
    /// Discriminator column of the legacy table naming the owning data table.
    pub table_discriminator: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            field_name: "field_name".to_string(),
            target_field_name: "db_field_name".to_string(),
            description: "description".to_string(),
            data_type: "data_type".to_string(),
            length: "field_length".to_string(),
            mandatory: "mandatory".to_string(),
            valid_values: "valid_values".to_string(),
            related_table: "related_table".to_string(),
            remarks: "remarks".to_string(),
            table_discriminator: "table_name".to_string(),
        }
    }
}

impl ColumnConfig {
    /// Columns whose joint presence marks a structured rule table.
    pub fn marker_set(&self) -> [&str; 6] {
        [
            self.field_name.as_str(),
            self.target_field_name.as_str(),
            self.description.as_str(),
            self.data_type.as_str(),
            self.length.as_str(),
            self.mandatory.as_str(),
        ]
    }
}

impl CatalogConfig {
    /// Parse a config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&text).map_err(|source| CatalogError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = file.catalog;
        // Relative database paths are resolved against the config file's directory.
        if config.database.is_relative() {
            if let Some(parent) = path.parent() {
                config.database = parent.join(&config.database);
            }
        }
        Ok(config)
    }

    /// Locate and load the config: explicit path, then `MDV_CONFIG`, then
    /// `mdv.toml` in the working directory. Falls back to defaults when no
    /// file is found.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }
        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }
}
