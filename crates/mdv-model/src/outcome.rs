use serde::{Deserialize, Serialize};

use crate::row::Row;

/// Per-row validation status.
///
/// `Warning` is part of the contract even though no current check produces it;
/// consumers branch on all three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowStatus {
    Valid,
    Warning,
    Error,
}

impl RowStatus {
    /// Three-way evaluation from collected violation counts.
    pub fn from_counts(errors: usize, warnings: usize) -> Self {
        if errors > 0 {
            RowStatus::Error
        } else if warnings > 0 {
            RowStatus::Warning
        } else {
            RowStatus::Valid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowStatus::Valid => "Valid",
            RowStatus::Warning => "Warning",
            RowStatus::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// 1-based position of the row in the upload.
    pub row_number: usize,
    /// Display key for the row. Not guaranteed unique.
    pub code: String,
    pub status: RowStatus,
    pub fields_with_issues: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub warning: usize,
    pub error: usize,
}

impl ValidationSummary {
    pub fn record(&mut self, status: RowStatus) {
        self.total += 1;
        match status {
            RowStatus::Valid => self.valid += 1,
            RowStatus::Warning => self.warning += 1,
            RowStatus::Error => self.error += 1,
        }
    }

    pub fn from_results(results: &[ValidationResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.record(result.status);
        }
        summary
    }

    pub fn has_errors(&self) -> bool {
        self.error > 0
    }
}

/// Response shape for a validation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub summary: ValidationSummary,
    pub results: Vec<ValidationResult>,
}

impl ValidationOutcome {
    pub fn issues(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results
            .iter()
            .filter(|result| result.status != RowStatus::Valid)
    }
}

/// Response shape for a sample/template request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleTemplate {
    /// Column headers in rule order.
    pub headers: Vec<String>,
    pub sample_row: Row,
}

impl SampleTemplate {
    /// Sample values aligned with `headers`.
    pub fn values(&self) -> Vec<&str> {
        self.headers
            .iter()
            .map(|header| self.sample_row.get(header).unwrap_or_default())
            .collect()
    }
}
