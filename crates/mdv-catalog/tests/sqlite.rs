use std::path::Path;

use mdv_catalog::{Catalog, CatalogConfig, CatalogError, ReadQuery, SqliteCatalog};
use rusqlite::Connection;

const SCHEMA: &str = r#"
CREATE TABLE main_categories (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE sub_categories (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    main_category_id INTEGER NOT NULL,
    template_path TEXT,
    sample_path TEXT,
    data_table TEXT
);
CREATE TABLE instructions (
    table_name TEXT,
    field_name TEXT,
    db_field_name TEXT,
    description TEXT,
    data_type TEXT,
    field_length TEXT,
    mandatory TEXT,
    valid_values TEXT
);
CREATE TABLE bp_rules (
    field_name TEXT,
    db_field_name TEXT,
    description TEXT,
    data_type TEXT,
    field_length INTEGER,
    mandatory TEXT
);
CREATE TABLE OCRD (CardCode TEXT, CardName TEXT, Currency TEXT);
INSERT INTO main_categories VALUES (1, 'Business Partner Master Data'), (2, 'Item Master Data');
INSERT INTO sub_categories VALUES
    (2, 'Vendors', 1, 'templates/vendors.xlsx', 'samples/vendors.xlsx', 'bp_rules'),
    (1, 'Customers', 1, NULL, NULL, 'OCRD');
INSERT INTO instructions VALUES
    ('OCRD', 'CardName', 'CardName', 'Name', 'String', '100', 'Y', NULL),
    ('OCRD', 'CardCode', 'CardCode', 'Code', 'Char', '15', 'Y', NULL);
INSERT INTO bp_rules VALUES ('Currency', 'Currency', 'Currency', 'Char', 3, 'N');
"#;

fn create_database(path: &Path) {
    let db = Connection::open(path).expect("create database");
    db.execute_batch(SCHEMA).expect("create schema");
}

fn open_catalog() -> (tempfile::TempDir, SqliteCatalog) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("masterdata.db");
    create_database(&path);
    let config = CatalogConfig {
        database: path,
        ..CatalogConfig::default()
    };
    let catalog = SqliteCatalog::open(&config).expect("open catalog");
    (dir, catalog)
}

#[test]
fn lists_main_categories_in_id_order() {
    let (_dir, catalog) = open_catalog();
    let names: Vec<String> = catalog
        .main_categories()
        .unwrap()
        .into_iter()
        .map(|category| category.name)
        .collect();
    assert_eq!(names, vec!["Business Partner Master Data", "Item Master Data"]);
}

#[test]
fn sub_categories_match_parent_name_exactly() {
    let (_dir, catalog) = open_catalog();
    let subs = catalog
        .sub_categories_for("Business Partner Master Data")
        .unwrap();
    let ids: Vec<i64> = subs.iter().map(|sub| sub.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(subs[1].template_path.as_deref(), Some("templates/vendors.xlsx"));

    let none = catalog
        .sub_categories_for("BUSINESS PARTNER MASTER DATA")
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn introspects_known_tables_and_columns() {
    let (_dir, catalog) = open_catalog();
    let known = catalog.known_tables().unwrap();
    assert!(known.contains("bp_rules"));
    assert!(known.contains("instructions"));
    assert!(known.contains("OCRD"));
    assert!(!known.contains("OITM"));

    let table = catalog.resolve_table("bp_rules").unwrap().expect("known");
    assert!(catalog.table_exists(&table).unwrap());
    let columns = catalog.table_columns(&table).unwrap();
    assert_eq!(columns.first().map(String::as_str), Some("field_name"));
    assert_eq!(columns.len(), 6);
}

#[test]
fn injection_shaped_names_are_never_resolved() {
    let (_dir, catalog) = open_catalog();
    let resolved = catalog
        .resolve_table("bp_rules; DROP TABLE instructions")
        .unwrap();
    assert!(resolved.is_none());
    assert!(catalog.known_tables().unwrap().contains("instructions"));
}

#[test]
fn reads_with_bound_filter_and_order() {
    let (_dir, catalog) = open_catalog();
    let legacy = catalog.legacy_table().clone();
    let rows = catalog
        .read_table(
            &legacy,
            &ReadQuery::all()
                .filter_eq("table_name", "OCRD")
                .order_by("field_name"),
        )
        .unwrap();
    let fields: Vec<_> = rows
        .iter()
        .map(|row| row["field_name"].clone().unwrap_or_default())
        .collect();
    assert_eq!(fields, vec!["CardCode", "CardName"]);
    assert_eq!(rows[0]["valid_values"], None);
}

#[test]
fn integer_columns_are_read_as_text() {
    let (_dir, catalog) = open_catalog();
    let table = catalog.resolve_table("bp_rules").unwrap().expect("known");
    let rows = catalog.read_table(&table, &ReadQuery::all()).unwrap();
    assert_eq!(rows[0]["field_length"].as_deref(), Some("3"));
}

#[test]
fn unknown_filter_column_is_a_table_scoped_error() {
    let (_dir, catalog) = open_catalog();
    let table = catalog.resolve_table("bp_rules").unwrap().expect("known");
    let error = catalog
        .read_table(&table, &ReadQuery::all().filter_eq("table_name", "x"))
        .unwrap_err();
    assert!(matches!(error, CatalogError::UnknownColumn { .. }));
    assert!(!error.is_unavailable());
}

#[test]
fn missing_database_is_unavailable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = CatalogConfig {
        database: dir.path().join("missing.db"),
        ..CatalogConfig::default()
    };
    let error = SqliteCatalog::open(&config).err().expect("open should fail");
    assert!(error.is_unavailable());
}

#[test]
fn missing_category_tables_are_unavailable() {
    let db = Connection::open_in_memory().expect("in-memory db");
    let catalog =
        SqliteCatalog::from_connection(db, &CatalogConfig::default().tables).expect("catalog");
    let error = catalog.sub_categories_for("anything").unwrap_err();
    assert!(error.is_unavailable());
}
