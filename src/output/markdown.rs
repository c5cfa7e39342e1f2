//! Markdown table output.

use std::io::Write;

use crate::error::Result;

use super::TableView;

/// Render the view as a markdown table. When any filter was active, a
/// `Filtered: X/Y rows matched` trailer reports how many rows survived.
pub fn write_markdown<W: Write>(out: &mut W, view: &TableView) -> Result<()> {
    if let Some(header) = view.header {
        write_row(
            out,
            (0..view.column_count()).map(|i| header.get(view.columns[i]).unwrap_or("")),
        )?;
        write!(out, "|")?;
        for _ in 0..view.column_count() {
            write!(out, " --- |")?;
        }
        writeln!(out)?;
    }

    for row in &view.rows {
        write_row(out, (0..view.column_count()).map(|i| view.cell(row, i)))?;
    }

    if view.filtered {
        writeln!(
            out,
            "\nFiltered: {}/{} rows matched",
            view.rows.len(),
            view.total_rows
        )?;
    }

    Ok(())
}

fn write_row<'a, W: Write>(out: &mut W, cells: impl Iterator<Item = &'a str>) -> Result<()> {
    write!(out, "|")?;
    for cell in cells {
        write!(out, " {cell} |")?;
    }
    writeln!(out)?;
    Ok(())
}
