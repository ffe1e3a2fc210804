pub mod category;
pub mod error;
pub mod outcome;
pub mod row;
pub mod rule;

pub use category::{CategoryListing, MainCategory, SubCategory};
pub use error::{ModelError, Result};
pub use outcome::{
    RowStatus, SampleTemplate, ValidationOutcome, ValidationResult, ValidationSummary,
};
pub use row::Row;
pub use rule::{DataType, FieldRule, parse_length, parse_mandatory, parse_valid_values};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_evaluation_is_three_way() {
        assert_eq!(RowStatus::from_counts(1, 3), RowStatus::Error);
        assert_eq!(RowStatus::from_counts(0, 1), RowStatus::Warning);
        assert_eq!(RowStatus::from_counts(0, 0), RowStatus::Valid);
    }

    #[test]
    fn summary_counts() {
        let results = vec![
            ValidationResult {
                row_number: 1,
                code: "C001".to_string(),
                status: RowStatus::Error,
                fields_with_issues: vec!["CardCode".to_string()],
                message: "CardCode is mandatory".to_string(),
            },
            ValidationResult {
                row_number: 2,
                code: "C002".to_string(),
                status: RowStatus::Valid,
                fields_with_issues: vec![],
                message: String::new(),
            },
        ];
        let summary = ValidationSummary::from_results(&results);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.error, 1);
        assert!(summary.has_errors());
    }

    #[test]
    fn outcome_serializes() {
        let outcome = ValidationOutcome::default();
        let json = serde_json::to_string(&outcome).expect("serialize outcome");
        let round: ValidationOutcome = serde_json::from_str(&json).expect("deserialize outcome");
        assert_eq!(round.summary.total, 0);
    }
}
