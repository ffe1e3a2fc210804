//! Row validation against a category's field rules.

use mdv_model::{FieldRule, Row, RowStatus, ValidationOutcome, ValidationResult, ValidationSummary};

use crate::checks;
use crate::issue::{Severity, Violation};

/// Validate every row against `rules`.
///
/// `rules` should already be de-duplicated (see `RuleSet::unique`). Results
/// keep the upload order and row numbers are 1-based.
pub fn validate(rows: &[Row], rules: &[FieldRule]) -> ValidationOutcome {
    let mut summary = ValidationSummary::default();
    let results: Vec<ValidationResult> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let result = validate_row(idx + 1, row, rules);
            summary.record(result.status);
            result
        })
        .collect();
    ValidationOutcome { summary, results }
}

/// Validate a single row.
pub fn validate_row(row_number: usize, row: &Row, rules: &[FieldRule]) -> ValidationResult {
    let violations: Vec<Violation> = rules
        .iter()
        .flat_map(|rule| checks::run_all(rule, field_value(row, &rule.field_name)))
        .collect();

    let errors = violations
        .iter()
        .filter(|v| v.severity() == Severity::Error)
        .count();
    let warnings = violations.len() - errors;

    let mut fields_with_issues: Vec<String> = Vec::new();
    for violation in &violations {
        if !fields_with_issues.iter().any(|f| f == violation.field()) {
            fields_with_issues.push(violation.field().to_string());
        }
    }

    let message = violations
        .iter()
        .map(Violation::message)
        .collect::<Vec<_>>()
        .join("; ");

    ValidationResult {
        row_number,
        code: row_code(row_number, row, rules),
        status: RowStatus::from_counts(errors, warnings),
        fields_with_issues,
        message,
    }
}

/// The first rule's value when present, else `Row N`.
fn row_code(row_number: usize, row: &Row, rules: &[FieldRule]) -> String {
    rules
        .first()
        .and_then(|rule| field_value(row, &rule.field_name))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(|| format!("Row {row_number}"), str::to_string)
}

/// Exact key first, then a case-insensitive header match.
fn field_value<'r>(row: &'r Row, field: &str) -> Option<&'r str> {
    row.get(field).or_else(|| {
        row.fields()
            .find(|name| name.eq_ignore_ascii_case(field))
            .and_then(|name| row.get(name))
    })
}
