//! CSV and TSV output.
//!
//! Fields are quoted only when they contain the delimiter, a quote, or a
//! newline, with embedded quotes doubled.

use std::io::Write;

use csv::WriterBuilder;

use crate::error::Result;

use super::TableView;

/// Render the view as comma-separated values.
pub fn write_csv<W: Write>(out: &mut W, view: &TableView) -> Result<()> {
    write_delimited(out, view, b',')
}

/// Render the view as tab-separated values.
pub fn write_tsv<W: Write>(out: &mut W, view: &TableView) -> Result<()> {
    write_delimited(out, view, b'\t')
}

fn write_delimited<W: Write>(out: &mut W, view: &TableView, delimiter: u8) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(out);

    if let Some(header) = view.header {
        let fields: Vec<&str> = (0..view.column_count())
            .map(|i| header.get(view.columns[i]).unwrap_or(""))
            .collect();
        writer.write_record(fields)?;
    }

    for row in &view.rows {
        let fields: Vec<&str> = (0..view.column_count()).map(|i| view.cell(row, i)).collect();
        writer.write_record(fields)?;
    }

    writer.flush().map_err(crate::error::Error::Io)?;
    Ok(())
}
