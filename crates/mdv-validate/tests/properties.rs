use mdv_model::{DataType, FieldRule, Row, RowStatus};
use mdv_validate::validate;
use proptest::prelude::*;

const FIELDS: [&str; 4] = ["CardCode", "CardName", "Currency", "Qty"];

fn data_type() -> impl Strategy<Value = DataType> {
    prop_oneof![
        Just(DataType::Char),
        Just(DataType::Integer),
        Just(DataType::String),
        Just(DataType::Decimal),
        Just(DataType::Date),
    ]
}

fn rule() -> impl Strategy<Value = FieldRule> {
    (
        prop::sample::select(FIELDS.to_vec()),
        data_type(),
        any::<bool>(),
        0u32..8,
        prop::collection::vec("[A-Z]{1,3}", 0..3),
    )
        .prop_map(|(field, data_type, mandatory, length, values)| {
            FieldRule::new(field, data_type)
                .mandatory(mandatory)
                .with_length(length)
                .with_valid_values(values)
        })
}

fn row() -> impl Strategy<Value = Row> {
    prop::collection::vec(
        (
            prop::sample::select(FIELDS.to_vec()),
            prop::option::of("[ A-Za-z0-9]{0,10}"),
        ),
        0..5,
    )
    .prop_map(|cells| {
        let mut row = Row::new();
        for (field, value) in cells {
            row.insert(field, value);
        }
        row
    })
}

proptest! {
    #[test]
    fn summary_tallies_every_row(
        rules in prop::collection::vec(rule(), 0..6),
        rows in prop::collection::vec(row(), 0..20),
    ) {
        let outcome = validate(&rows, &rules);
        let summary = outcome.summary;
        prop_assert_eq!(summary.total, rows.len());
        prop_assert_eq!(summary.valid + summary.warning + summary.error, summary.total);
        prop_assert_eq!(outcome.results.len(), rows.len());
    }

    #[test]
    fn status_matches_reported_fields(
        rules in prop::collection::vec(rule(), 0..6),
        rows in prop::collection::vec(row(), 1..10),
    ) {
        let outcome = validate(&rows, &rules);
        for (idx, result) in outcome.results.iter().enumerate() {
            prop_assert_eq!(result.row_number, idx + 1);
            let valid = result.status == RowStatus::Valid;
            prop_assert_eq!(valid, result.fields_with_issues.is_empty());
            prop_assert_eq!(valid, result.message.is_empty());
            prop_assert!(result.status != RowStatus::Warning);
        }
    }

    #[test]
    fn missing_mandatory_field_is_an_error(rows in prop::collection::vec(row(), 1..10)) {
        let rules = [FieldRule::new("Missing", DataType::Char).mandatory(true)];
        let outcome = validate(&rows, &rules);
        prop_assert_eq!(outcome.summary.error, rows.len());
    }
}
