//! Table rendering for list and detail views

use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Columns, object::Rows},
};

/// Render rows as a rounded table with a total footer.
///
/// `noun` names the resource in the empty message, e.g. `"contacts"`.
pub fn format_table<T: Tabled>(rows: &[T], noun: &str) -> String {
    if rows.is_empty() {
        return format!("No {} found.", noun);
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!("{}\nTotal: {}", table, rows.len())
}

/// Render label/value pairs as a borderless two-column block.
pub fn format_details(fields: &[(&str, String)]) -> String {
    let mut builder = Builder::default();
    for (label, value) in fields {
        builder.push_record([format!("{}:", label), value.clone()]);
    }

    let mut table = builder.build();
    table
        .with(Style::blank())
        .with(Modify::new(Columns::first()).with(Alignment::left()));
    table.to_string()
}
