use serde::{Deserialize, Serialize};

/// Top-level business grouping shown to end users (e.g. "Business Partner Master Data").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainCategory {
    pub id: i64,
    pub name: String,
}

/// Configuration row pointing at a physical data table plus template/sample files.
///
/// `data_table` is a soft reference: it may name a table that does not exist
/// or whose columns do not hold rule definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: i64,
    pub name: String,
    pub main_category_id: i64,
    pub template_path: Option<String>,
    pub sample_path: Option<String>,
    pub data_table: Option<String>,
}

impl SubCategory {
    /// The referenced table name, if one is configured and non-blank.
    pub fn data_table_name(&self) -> Option<&str> {
        self.data_table
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// A main category together with the subcategories that reference it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListing {
    pub category: MainCategory,
    pub sub_categories: Vec<SubCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(data_table: Option<&str>) -> SubCategory {
        SubCategory {
            id: 1,
            name: "Customers".to_string(),
            main_category_id: 1,
            template_path: None,
            sample_path: None,
            data_table: data_table.map(String::from),
        }
    }

    #[test]
    fn blank_data_table_is_ignored() {
        assert_eq!(sub(None).data_table_name(), None);
        assert_eq!(sub(Some("   ")).data_table_name(), None);
        assert_eq!(sub(Some(" OCRD ")).data_table_name(), Some("OCRD"));
    }
}
