//! Per-field checks.
//!
//! Each check looks at one rule and the row's value for that rule's field and
//! reports at most one violation. Only the mandatory check fires on absent
//! values; the others apply to present (non-blank) values.

pub mod datatype;
pub mod length;
pub mod mandatory;
pub mod valid_values;

use mdv_model::FieldRule;

use crate::issue::Violation;

/// Run every check for one rule, in reporting order.
pub fn run_all(rule: &FieldRule, value: Option<&str>) -> Vec<Violation> {
    let present = value.filter(|value| !value.trim().is_empty());
    [
        mandatory::check(rule, present),
        length::check(rule, present),
        valid_values::check(rule, present),
        datatype::check(rule, present),
    ]
    .into_iter()
    .flatten()
    .collect()
}
