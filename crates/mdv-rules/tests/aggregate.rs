use mdv_catalog::{ColumnConfig, InMemoryCatalog};
use mdv_model::{DataType, SubCategory};
use mdv_rules::{Candidate, CoreError, RuleService, RuleSet};

const RULE_COLUMNS: &[&str] = &[
    "field_name",
    "db_field_name",
    "description",
    "data_type",
    "field_length",
    "mandatory",
    "valid_values",
];

const LEGACY_COLUMNS: &[&str] = &[
    "table_name",
    "field_name",
    "db_field_name",
    "description",
    "data_type",
    "field_length",
    "mandatory",
];

fn sub(id: i64, parent: i64, table: &str) -> SubCategory {
    SubCategory {
        id,
        name: format!("sub-{id}"),
        main_category_id: parent,
        template_path: None,
        sample_path: None,
        data_table: Some(table.to_string()),
    }
}

/// Business partners: `bp_rules` is structured, `OCRD` is a business table
/// whose rules live in `instructions`.
fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_main_category(1, "Business Partner Master Data")
        .with_main_category(2, "Item Master Data")
        .with_main_category(3, "Finance")
        .with_table(
            "bp_rules",
            RULE_COLUMNS,
            &[
                &[
                    ("field_name", "Currency"),
                    ("data_type", "Char"),
                    ("field_length", "3"),
                    ("mandatory", "N"),
                    ("valid_values", "USD,EUR"),
                ],
                &[
                    ("field_name", "CardType"),
                    ("data_type", "Char"),
                    ("field_length", "1"),
                    ("mandatory", "Y"),
                    ("valid_values", "C;S;L"),
                ],
            ],
        )
        .with_table("OCRD", &["CardCode", "CardName"], &[])
        .with_table("OITM", &["ItemCode"], &[])
        .with_table(
            "instructions",
            LEGACY_COLUMNS,
            &[
                &[
                    ("table_name", "OCRD"),
                    ("field_name", "CardName"),
                    ("data_type", "String"),
                    ("field_length", "100"),
                    ("mandatory", "Y"),
                ],
                &[
                    ("table_name", "OCRD"),
                    ("field_name", "CardCode"),
                    ("data_type", "Char"),
                    ("field_length", "15"),
                    ("mandatory", "Y"),
                ],
                &[
                    ("table_name", "OITM"),
                    ("field_name", "ItemCode"),
                    ("data_type", "Char"),
                    ("field_length", "20"),
                    ("mandatory", "Yes"),
                ],
                &[
                    ("table_name", "OITM"),
                    ("field_name", "OnHand"),
                    ("data_type", "int"),
                    ("field_length", "lots"),
                ],
                &[("field_name", "Remarks"), ("data_type", "String")],
            ],
        )
}

fn service(catalog: InMemoryCatalog) -> RuleService<InMemoryCatalog> {
    RuleService::new(catalog, ColumnConfig::default())
}

fn field_names(set: &RuleSet) -> Vec<&str> {
    set.rules.iter().map(|rule| rule.field_name.as_str()).collect()
}

#[test]
fn structured_and_legacy_tables_merge_sorted_by_field() {
    let catalog = catalog()
        .with_sub_category(sub(1, 1, "bp_rules"))
        .with_sub_category(sub(2, 1, "OCRD"));
    let set = service(catalog)
        .instructions("Business Partner Master Data")
        .unwrap();

    assert_eq!(
        field_names(&set),
        vec!["CardCode", "CardName", "CardType", "Currency"]
    );
    assert!(set.duplicates.is_empty());

    let currency = &set.rules[3];
    assert_eq!(currency.source_table, "bp_rules");
    assert_eq!(currency.valid_values, vec!["USD", "EUR"]);
    assert!(!currency.mandatory);

    let card_code = &set.rules[0];
    assert_eq!(card_code.source_table, "OCRD");
    assert_eq!(card_code.data_type, DataType::Char);
    assert_eq!(card_code.length, 15);
    assert!(card_code.mandatory);
}

#[test]
fn missing_table_is_the_same_as_no_mapping() {
    let with_missing = catalog()
        .with_sub_category(sub(1, 1, "bp_rules"))
        .with_sub_category(sub(2, 1, "does_not_exist"));
    let without = catalog().with_sub_category(sub(1, 1, "bp_rules"));

    let a = service(with_missing)
        .instructions("Business Partner Master Data")
        .unwrap();
    let b = service(without)
        .instructions("Business Partner Master Data")
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
}

#[test]
fn failing_table_is_skipped() {
    let catalog = catalog()
        .failing_table("broken_rules", RULE_COLUMNS)
        .with_sub_category(sub(1, 1, "broken_rules"))
        .with_sub_category(sub(2, 1, "bp_rules"));
    let set = service(catalog)
        .instructions("Business Partner Master Data")
        .unwrap();
    assert_eq!(field_names(&set), vec!["CardType", "Currency"]);
}

#[test]
fn malformed_legacy_rows_are_skipped_individually() {
    let catalog = catalog().with_sub_category(sub(1, 2, "OITM"));
    let set = service(catalog).instructions("Item Master Data").unwrap();
    assert_eq!(field_names(&set), vec!["ItemCode"]);
    assert!(set.rules[0].mandatory);
    assert_eq!(set.rules[0].source_table, "OITM");
}

#[test]
fn unmapped_category_reads_the_whole_legacy_table() {
    let set = service(catalog()).instructions("Finance").unwrap();
    assert_eq!(
        field_names(&set),
        vec!["Remarks", "CardCode", "CardName", "ItemCode"]
    );
    let sources: Vec<&str> = set.rules.iter().map(|r| r.source_table.as_str()).collect();
    assert_eq!(sources, vec!["instructions", "OCRD", "OCRD", "OITM"]);
}

#[test]
fn fallback_without_legacy_table_is_empty() {
    let catalog = InMemoryCatalog::new().with_main_category(1, "Finance");
    let set = service(catalog).instructions("Finance").unwrap();
    assert!(set.is_empty());
}

#[test]
fn later_table_wins_on_duplicate_field() {
    let catalog = catalog()
        .with_table(
            "bp_rules_v2",
            RULE_COLUMNS,
            &[&[
                ("field_name", "CardCode"),
                ("data_type", "Char"),
                ("field_length", "20"),
                ("mandatory", "Y"),
            ]],
        )
        .with_sub_category(sub(1, 1, "OCRD"))
        .with_sub_category(sub(2, 1, "bp_rules_v2"));
    let set = service(catalog)
        .instructions("Business Partner Master Data")
        .unwrap();

    assert_eq!(set.duplicates, vec!["CardCode"]);
    let unique = set.unique();
    let card_code = unique
        .iter()
        .find(|rule| rule.field_name == "CardCode")
        .expect("CardCode rule");
    assert_eq!(card_code.source_table, "bp_rules_v2");
    assert_eq!(card_code.length, 20);
    assert_eq!(unique.len(), 2);
}

#[test]
fn resolution_is_never_empty() {
    let service = service(catalog().with_sub_category(sub(1, 1, "OCRD")));
    for category in ["Business Partner Master Data", "Finance", "", "unknown"] {
        let resolution = mdv_rules::CategoryResolver::new(service.catalog())
            .resolve_tables(category)
            .unwrap();
        assert!(!resolution.candidates.is_empty());
    }
    let fallback = mdv_rules::CategoryResolver::new(service.catalog())
        .resolve_tables("Finance")
        .unwrap();
    assert_eq!(fallback.candidates, vec![Candidate::LegacyFallback]);
}

#[test]
fn categories_list_sub_categories() {
    let catalog = catalog()
        .with_sub_category(sub(4, 1, "OCRD"))
        .with_sub_category(sub(3, 1, "bp_rules"))
        .with_sub_category(sub(5, 2, "OITM"));
    let listings = service(catalog).categories().unwrap();
    assert_eq!(listings.len(), 3);
    let ids: Vec<i64> = listings[0].sub_categories.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 4]);
    assert!(listings[2].sub_categories.is_empty());
}

#[test]
fn unavailable_store_is_reported() {
    let result = service(catalog().unavailable()).instructions("Finance");
    assert!(matches!(result, Err(CoreError::StoreUnavailable { .. })));
}

#[test]
fn case_variants_of_one_table_are_read_once() {
    let catalog = catalog()
        .with_sub_category(sub(1, 1, "OCRD"))
        .with_sub_category(sub(2, 1, "ocrd"));
    let set = service(catalog)
        .instructions("Business Partner Master Data")
        .unwrap();
    assert_eq!(field_names(&set), vec!["CardCode", "CardName"]);
    assert!(set.duplicates.is_empty());
}

#[test]
fn fallback_reports_fields_shared_across_tables() {
    let catalog = InMemoryCatalog::new()
        .with_main_category(1, "Finance")
        .with_table(
            "instructions",
            LEGACY_COLUMNS,
            &[
                &[
                    ("table_name", "OCRD"),
                    ("field_name", "CardCode"),
                    ("field_length", "15"),
                ],
                &[
                    ("table_name", "ORDR"),
                    ("field_name", "CardCode"),
                    ("field_length", "20"),
                ],
            ],
        );
    let set = service(catalog).instructions("Finance").unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.duplicates, vec!["CardCode"]);
    let unique = set.unique();
    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].source_table, "ORDR");
    assert_eq!(unique[0].length, 20);
}

#[test]
fn fallback_propagates_store_going_down() {
    let catalog = InMemoryCatalog::new()
        .with_main_category(1, "Finance")
        .offline_table("instructions", LEGACY_COLUMNS);
    let result = service(catalog).instructions("Finance");
    assert!(matches!(result, Err(CoreError::StoreUnavailable { .. })));
}
