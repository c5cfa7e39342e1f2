//! Aligned ASCII table output.

use std::io::Write;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};

use crate::error::Result;

use super::TableView;

/// Color cycle applied per visible column when coloring is on.
const COLUMN_COLORS: [Color; 12] = [
    Color::DarkCyan,
    Color::DarkYellow,
    Color::DarkMagenta,
    Color::DarkGreen,
    Color::DarkBlue,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::DarkRed,
];

/// Render the view as an aligned box table, followed by a row count line.
pub fn write_ascii_table<W: Write>(out: &mut W, view: &TableView, color: bool) -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    if view.header.is_some() {
        let header_cells: Vec<String> = (0..view.column_count())
            .map(|i| view.header_cell(i).to_string())
            .collect();
        table.set_header(header_cells);
    }

    for row in &view.rows {
        let cells: Vec<Cell> = (0..view.column_count())
            .map(|i| {
                let cell = Cell::new(sanitize(view.cell(row, i)));
                if color {
                    cell.fg(COLUMN_COLORS[i % COLUMN_COLORS.len()])
                } else {
                    cell
                }
            })
            .collect();
        table.add_row(cells);
    }

    writeln!(out, "{table}")?;
    writeln!(out, "{} row(s)", view.rows.len())?;
    Ok(())
}

/// Tabs and newlines inside a cell would break the alignment.
fn sanitize(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}
