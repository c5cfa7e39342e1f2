//! Excel 2003 SpreadsheetML output.
//!
//! One worksheet, one table. Cells whose text parses completely as a
//! number are typed `Number` so spreadsheet applications treat them
//! numerically; everything else is `String`.

use std::io::Write;

use crate::error::Result;
use crate::utils::parse_number;

use super::html::escape_html;
use super::TableView;

/// Render the view as a SpreadsheetML workbook.
pub fn write_spreadsheet_xml<W: Write>(out: &mut W, view: &TableView) -> Result<()> {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet""#
    )?;
    writeln!(
        out,
        r#"          xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">"#
    )?;
    writeln!(out, r#" <Worksheet ss:Name="Sheet1">"#)?;
    writeln!(out, "  <Table>")?;

    if view.header.is_some() {
        write!(out, "   <Row>")?;
        for i in 0..view.column_count() {
            write_cell(out, view.header_cell(i), false)?;
        }
        writeln!(out, "</Row>")?;
    }

    for row in &view.rows {
        write!(out, "   <Row>")?;
        for i in 0..view.column_count() {
            let text = view.cell(row, i);
            write_cell(out, text, parse_number(text).is_some())?;
        }
        writeln!(out, "</Row>")?;
    }

    writeln!(out, "  </Table>")?;
    writeln!(out, " </Worksheet>")?;
    writeln!(out, "</Workbook>")?;
    Ok(())
}

fn write_cell<W: Write>(out: &mut W, text: &str, numeric: bool) -> Result<()> {
    let (cell_type, value) = if numeric {
        ("Number", text.trim().to_string())
    } else {
        ("String", escape_html(text))
    };
    write!(out, r#"<Cell><Data ss:Type="{cell_type}">{value}</Data></Cell>"#)?;
    Ok(())
}
