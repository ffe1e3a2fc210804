#![deny(unsafe_code)]

//! Category resolution and field rule aggregation.
//!
//! A category maps to zero or more physical tables through its
//! subcategories. Each table either stores rules directly (structured) or has
//! its rules kept in the global legacy instruction table. The aggregator reads
//! whichever applies and merges the results into one [`RuleSet`].

pub mod aggregator;
pub mod error;
pub mod projection;
pub mod resolver;
pub mod rule_set;
pub mod service;

pub use aggregator::{RuleAggregator, TableShape, classify};
pub use error::{CoreError, Result};
pub use projection::{Malformed, project};
pub use resolver::{Candidate, CategoryResolver, Resolution};
pub use rule_set::RuleSet;
pub use service::RuleService;
