//! Maximum length check.
//!
//! Length is counted in characters, not bytes. A rule length of 0 means the
//! field is unbounded.

use mdv_model::FieldRule;

use crate::issue::Violation;

pub fn check(rule: &FieldRule, present: Option<&str>) -> Option<Violation> {
    if rule.length == 0 {
        return None;
    }
    let found = present?.chars().count();
    (found > rule.length as usize).then(|| Violation::TooLong {
        field: rule.field_name.clone(),
        max_allowed: rule.length,
        found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdv_model::DataType;

    #[test]
    fn counts_characters() {
        let rule = FieldRule::new("CardName", DataType::String).with_length(5);
        assert!(check(&rule, Some("Zürich")).is_some());
        assert!(check(&rule, Some("Genf")).is_none());
        assert!(check(&rule, Some("Köln!")).is_none());
        assert!(check(&rule, None).is_none());
    }

    #[test]
    fn zero_length_is_unbounded() {
        let rule = FieldRule::new("Notes", DataType::String);
        let long = "x".repeat(10_000);
        assert!(check(&rule, Some(&long)).is_none());
    }
}
