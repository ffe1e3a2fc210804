use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One uploaded spreadsheet line: field identifier to raw value.
///
/// `None` marks an absent or null cell. Values are kept exactly as uploaded;
/// trimming is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: BTreeMap<String, Option<String>>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Option<String>) {
        self.values.insert(field.into(), value);
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, Some(value.into()));
        self
    }

    /// Raw value for a field. Absent keys and null cells both yield `None`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(|value| value.as_deref())
    }

    /// Value for a field when it carries non-whitespace content.
    pub fn present(&self, field: &str) -> Option<&str> {
        self.get(field).filter(|value| !value.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (field, value) in iter {
            row.insert(field, Some(value.into()));
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_ignores_blank_values() {
        let mut row = Row::from_iter([("CardCode", "C001"), ("CardName", "   ")]);
        row.insert("Phone", None);

        assert_eq!(row.present("CardCode"), Some("C001"));
        assert_eq!(row.get("CardName"), Some("   "));
        assert_eq!(row.present("CardName"), None);
        assert_eq!(row.get("Phone"), None);
        assert_eq!(row.get("Missing"), None);
        assert_eq!(row.len(), 3);
    }
}
