#![deny(unsafe_code)]

//! Validation of uploaded master-data rows against a category's field rules.
//!
//! Checks, in reporting order per rule:
//!
//! - **Mandatory**: value must be present and non-blank
//! - **Length**: character count must not exceed the rule length
//! - **Valid values**: value must be one of the allowed literals
//! - **Type**: `Integer` fields must parse as a 64-bit integer
//!
//! # Example
//!
//! ```ignore
//! use mdv_validate::MasterDataService;
//!
//! let service = MasterDataService::new(catalog, config.columns);
//! let outcome = service.validate("Business Partner Master Data", &rows)?;
//! println!("{} of {} rows have errors", outcome.summary.error, outcome.summary.total);
//! ```

pub mod checks;
pub mod engine;
pub mod issue;
pub mod report;
pub mod sample;
pub mod service;

pub use engine::{validate, validate_row};
pub use issue::{Severity, Violation};
pub use report::{REPORT_HEADERS, ValidationReport};
pub use sample::{generate_sample, sample_value};
pub use service::MasterDataService;

pub use mdv_rules::{CoreError, RuleSet};
