//! Validation report payload written by the CLI.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use mdv_model::{ValidationOutcome, ValidationResult, ValidationSummary};

/// Column headers of the flat (CSV) report.
pub const REPORT_HEADERS: [&str; 5] = ["Row", "Code", "Status", "Fields", "Message"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// RFC 3339 timestamp, UTC.
    pub generated_at: String,
    pub summary: ValidationSummary,
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn new(category: impl Into<String>, outcome: ValidationOutcome) -> Self {
        Self {
            category: category.into(),
            source: None,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            summary: outcome.summary,
            results: outcome.results,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// One flat record per result, aligned with [`REPORT_HEADERS`].
    pub fn records(&self) -> impl Iterator<Item = [String; 5]> + '_ {
        self.results.iter().map(|result| {
            [
                result.row_number.to_string(),
                result.code.clone(),
                result.status.label().to_string(),
                result.fields_with_issues.join(", "),
                result.message.clone(),
            ]
        })
    }
}
