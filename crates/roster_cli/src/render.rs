//! Table output for record rows.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use roster_core::{Record, RecordColumn};
use std::io::{self, Write};

/// Builds a table of `rows`, each prefixed by its label in a `#` column.
pub fn records_table(rows: &[(usize, &Record)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);

    let mut header = vec![header_cell("#")];
    header.extend(RecordColumn::ALL.map(|column| header_cell(column.title())));
    table.set_header(header);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for (label, record) in rows {
        let mut row = vec![Cell::new(label)];
        row.extend(RecordColumn::ALL.map(|column| Cell::new(record.value(column))));
        table.add_row(row);
    }
    table
}

/// Writes the table followed by a row count line.
pub fn write_table<W: Write>(out: &mut W, rows: &[(usize, &Record)]) -> io::Result<()> {
    writeln!(out, "{}", records_table(rows))?;
    writeln!(
        out,
        "{} record{}",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    )
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
