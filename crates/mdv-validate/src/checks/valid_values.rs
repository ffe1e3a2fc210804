use mdv_model::FieldRule;

use crate::issue::Violation;

/// Membership is exact and case-sensitive. Surrounding whitespace in the
/// uploaded value is ignored.
pub fn check(rule: &FieldRule, present: Option<&str>) -> Option<Violation> {
    if !rule.has_valid_values() {
        return None;
    }
    let value = present?.trim();
    if rule.valid_values.iter().any(|allowed| allowed == value) {
        return None;
    }
    Some(Violation::NotAllowed {
        field: rule.field_name.clone(),
        allowed: rule.valid_values.clone(),
    })
}
