//! CSV writers for reports and sample templates.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use mdv_model::SampleTemplate;
use mdv_validate::{REPORT_HEADERS, ValidationReport};

/// Write one line per validated row.
pub fn write_report_csv<W: Write>(writer: W, report: &ValidationReport) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(REPORT_HEADERS)?;
    for record in report.records() {
        out.write_record(&record)?;
    }
    out.flush()?;
    Ok(())
}

/// Write the header line followed by the sample row.
pub fn write_sample_csv<W: Write>(writer: W, sample: &SampleTemplate) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(&sample.headers)?;
    out.write_record(sample.values())?;
    out.flush()?;
    Ok(())
}

pub fn write_report_file(path: &Path, report: &ValidationReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_report_csv(file, report).with_context(|| format!("write {}", path.display()))
}

pub fn write_sample_file(path: &Path, sample: &SampleTemplate) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_sample_csv(file, sample).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdv_model::{Row, RowStatus, ValidationOutcome, ValidationResult, ValidationSummary};

    #[test]
    fn sample_csv_quotes_when_needed() {
        let sample = SampleTemplate {
            headers: vec!["CardCode".to_string(), "CardName".to_string()],
            sample_row: Row::new()
                .with("CardCode", "SAMPLE")
                .with("CardName", "Sample, Inc."),
        };
        let mut buffer = Vec::new();
        write_sample_csv(&mut buffer, &sample).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "CardCode,CardName\nSAMPLE,\"Sample, Inc.\"\n"
        );
    }

    #[test]
    fn report_csv_has_header_and_rows() {
        let results = vec![ValidationResult {
            row_number: 3,
            code: "C3".to_string(),
            status: RowStatus::Error,
            fields_with_issues: vec!["Currency".to_string()],
            message: "Currency must be one of: USD, EUR".to_string(),
        }];
        let report = ValidationReport::new(
            "Items",
            ValidationOutcome {
                summary: ValidationSummary::from_results(&results),
                results,
            },
        );
        let mut buffer = Vec::new();
        write_report_csv(&mut buffer, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Row,Code,Status,Fields,Message"));
        assert_eq!(
            lines.next(),
            Some("3,C3,Error,Currency,\"Currency must be one of: USD, EUR\"")
        );
    }
}
