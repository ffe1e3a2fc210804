//! Data type conformance.
//!
//! Only `Integer` is enforced. Other declared types are informational.

use mdv_model::{DataType, FieldRule};

use crate::issue::Violation;

pub fn check(rule: &FieldRule, present: Option<&str>) -> Option<Violation> {
    if rule.data_type != DataType::Integer {
        return None;
    }
    let value = present?.trim();
    (!is_integer(value)).then(|| Violation::NotInteger {
        field: rule.field_name.clone(),
    })
}

/// Optional sign followed by ASCII digits, with no width limit.
fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_values() {
        let rule = FieldRule::new("Qty", DataType::Integer);
        assert!(check(&rule, Some("42")).is_none());
        assert!(check(&rule, Some(" -7 ")).is_none());
        assert!(check(&rule, Some("4.5")).is_some());
        assert!(check(&rule, Some("abc")).is_some());
        assert!(check(&rule, None).is_none());
        assert!(check(&rule, Some("-")).is_some());
        assert!(check(&rule, Some("+-1")).is_some());
    }

    #[test]
    fn integers_wider_than_i64_pass() {
        let rule = FieldRule::new("DocNum", DataType::Integer);
        assert!(check(&rule, Some("12345678901234567890")).is_none());
        assert!(check(&rule, Some("+0012")).is_none());
    }

    #[test]
    fn other_types_are_not_enforced() {
        for data_type in [DataType::Decimal, DataType::Date, DataType::Char] {
            let rule = FieldRule::new("X", data_type);
            assert!(check(&rule, Some("not a number")).is_none());
        }
    }
}
