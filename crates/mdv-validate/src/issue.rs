//! Field-level violations.
//!
//! Each variant carries only the data its message needs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// Mandatory field is absent or blank.
    Mandatory { field: String },
    /// Value is longer than the rule allows.
    TooLong {
        field: String,
        max_allowed: u32,
        found: usize,
    },
    /// Value is not one of the allowed literals.
    NotAllowed { field: String, allowed: Vec<String> },
    /// Integer field holds a non-integer value.
    NotInteger { field: String },
}

impl Violation {
    pub fn field(&self) -> &str {
        match self {
            Violation::Mandatory { field }
            | Violation::TooLong { field, .. }
            | Violation::NotAllowed { field, .. }
            | Violation::NotInteger { field } => field,
        }
    }

    /// Every current check is an error.
    pub fn severity(&self) -> Severity {
        Severity::Error
    }

    pub fn message(&self) -> String {
        match self {
            Violation::Mandatory { field } => format!("{field} is mandatory"),
            Violation::TooLong {
                field, max_allowed, ..
            } => format!("{field} exceeds maximum length of {max_allowed}"),
            Violation::NotAllowed { field, allowed } => {
                format!("{field} must be one of: {}", allowed.join(", "))
            }
            Violation::NotInteger { field } => format!("{field} must be an integer"),
        }
    }
}
