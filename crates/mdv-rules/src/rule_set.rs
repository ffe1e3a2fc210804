use std::collections::HashMap;

use serde::Serialize;

use mdv_model::FieldRule;

/// Aggregated rules for one category.
///
/// `rules` may hold several entries for one field name, in candidate order.
/// [`unique`](RuleSet::unique) is the view every consumer should use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    pub rules: Vec<FieldRule>,
    /// Field names contributed by more than one rule, in first-collision order.
    pub duplicates: Vec<String>,
}

impl RuleSet {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for rule in &rules {
            let count = seen.entry(rule.field_name.as_str()).or_default();
            *count += 1;
            if *count == 2 {
                duplicates.push(rule.field_name.clone());
            }
        }
        Self { rules, duplicates }
    }

    /// One rule per field name. A later rule replaces an earlier one in place,
    /// so order follows first appearance.
    pub fn unique(&self) -> Vec<FieldRule> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut unique: Vec<FieldRule> = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            match index.get(rule.field_name.as_str()) {
                Some(&slot) => unique[slot] = rule.clone(),
                None => {
                    index.insert(rule.field_name.as_str(), unique.len());
                    unique.push(rule.clone());
                }
            }
        }
        unique
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
