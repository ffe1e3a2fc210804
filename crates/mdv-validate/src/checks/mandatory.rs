use mdv_model::FieldRule;

use crate::issue::Violation;

pub fn check(rule: &FieldRule, present: Option<&str>) -> Option<Violation> {
    (rule.mandatory && present.is_none()).then(|| Violation::Mandatory {
        field: rule.field_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdv_model::DataType;

    #[test]
    fn only_mandatory_rules_fire() {
        let required = FieldRule::new("CardCode", DataType::Char).mandatory(true);
        let optional = FieldRule::new("Notes", DataType::String);
        assert!(check(&required, None).is_some());
        assert!(check(&required, Some("C1")).is_none());
        assert!(check(&optional, None).is_none());
    }
}
