use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use mdv_model::{CategoryListing, FieldRule, RowStatus, ValidationSummary};
use mdv_validate::{RuleSet, ValidationReport};

pub fn print_categories(listings: &[CategoryListing]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Sub category"),
        header_cell("Data table"),
        header_cell("Template"),
        header_cell("Sample"),
    ]);
    apply_table_style(&mut table);
    for listing in listings {
        if listing.sub_categories.is_empty() {
            table.add_row(vec![
                Cell::new(&listing.category.name).add_attribute(Attribute::Bold),
                dim_cell("-"),
                dim_cell("legacy"),
                dim_cell("-"),
                dim_cell("-"),
            ]);
            continue;
        }
        for (idx, sub) in listing.sub_categories.iter().enumerate() {
            let category = if idx == 0 {
                Cell::new(&listing.category.name).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                category,
                Cell::new(&sub.name),
                optional_cell(sub.data_table_name()),
                optional_cell(sub.template_path.as_deref()),
                optional_cell(sub.sample_path.as_deref()),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_rules(category: &str, rules: &RuleSet) {
    println!("Category: {category}");
    let unique = rules.unique();
    if unique.is_empty() {
        println!("No field rules found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Target"),
        header_cell("Type"),
        header_cell("Length"),
        header_cell("Mandatory"),
        header_cell("Valid values"),
        header_cell("Source"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for rule in &unique {
        table.add_row(rule_row(rule));
    }
    println!("{table}");
    if !rules.duplicates.is_empty() {
        eprintln!(
            "Fields defined by more than one table (last one wins): {}",
            rules.duplicates.join(", ")
        );
    }
}

fn rule_row(rule: &FieldRule) -> Vec<Cell> {
    vec![
        Cell::new(&rule.field_name).add_attribute(Attribute::Bold),
        Cell::new(&rule.target_field_name),
        Cell::new(rule.data_type),
        if rule.length == 0 {
            dim_cell("-")
        } else {
            Cell::new(rule.length)
        },
        if rule.mandatory {
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        },
        if rule.has_valid_values() {
            Cell::new(rule.valid_values.join(", "))
        } else {
            dim_cell("-")
        },
        Cell::new(&rule.source_table),
        Cell::new(&rule.description),
    ]
}

pub fn print_validation(report: &ValidationReport) {
    println!("Category: {}", report.category);
    if let Some(source) = &report.source {
        println!("Upload: {source}");
    }
    print_summary_table(&report.summary);
    print_issue_table(report);
}

fn print_summary_table(summary: &ValidationSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Valid"),
        header_cell("Warning"),
        header_cell("Error"),
    ]);
    apply_summary_table_style(&mut table);
    for idx in 0..4 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.total).add_attribute(Attribute::Bold),
        count_cell(summary.valid, Color::Green),
        count_cell(summary.warning, Color::Yellow),
        count_cell(summary.error, Color::Red),
    ]);
    println!("{table}");
}

fn print_issue_table(report: &ValidationReport) {
    let mut issues = report
        .results
        .iter()
        .filter(|result| result.status != RowStatus::Valid)
        .peekable();
    if issues.peek().is_none() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Code"),
        header_cell("Status"),
        header_cell("Fields"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for result in issues {
        table.add_row(vec![
            Cell::new(result.row_number),
            Cell::new(&result.code),
            status_cell(result.status),
            Cell::new(result.fields_with_issues.join(", ")),
            Cell::new(&result.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn status_cell(status: RowStatus) -> Cell {
    match status {
        RowStatus::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        RowStatus::Warning => Cell::new("WARN").fg(Color::Yellow),
        RowStatus::Valid => Cell::new("OK").fg(Color::Green),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
