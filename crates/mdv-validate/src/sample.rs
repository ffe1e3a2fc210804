use mdv_model::{DataType, FieldRule, Row, SampleTemplate};

/// Build a one-row template with a plausible value for every rule.
///
/// The output depends only on the rules, so repeated calls are identical.
pub fn generate_sample(rules: &[FieldRule]) -> SampleTemplate {
    let mut sample_row = Row::new();
    let mut headers = Vec::with_capacity(rules.len());
    for rule in rules {
        headers.push(rule.field_name.clone());
        sample_row.insert(rule.field_name.clone(), Some(sample_value(rule)));
    }
    SampleTemplate {
        headers,
        sample_row,
    }
}

pub fn sample_value(rule: &FieldRule) -> String {
    if let Some(first) = rule.valid_values.first() {
        return first.clone();
    }
    match rule.data_type {
        DataType::Integer => "123".to_string(),
        DataType::String => format!("Sample {}", rule.field_name),
        _ => "SAMPLE".to_string(),
    }
}
