//! Delimited-text reading.
//!
//! The reader is deliberately tolerant: rows may have differing field
//! counts (short rows stay short; the evaluator and renderers treat the
//! missing cells as absent), and comment lines are skipped entirely.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::table::{Row, Table};

/// Options controlling how a delimited file is read.
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Lines starting with this byte are skipped.
    pub comment: Option<u8>,
    /// Treat the first row as a header.
    pub has_header: bool,
    /// Drop the first row entirely (it is neither header nor data).
    pub skip_first_row: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: Some(b'#'),
            has_header: true,
            skip_first_row: false,
        }
    }
}

/// Read a table from a file path.
pub fn read_table<P: AsRef<Path>>(path: P, options: &ReaderOptions) -> Result<Table> {
    let file = File::open(path.as_ref())?;
    read_table_from_reader(file, options)
}

/// Read a table from any byte source.
pub fn read_table_from_reader<R: Read>(source: R, options: &ReaderOptions) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .comment(options.comment)
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut header = None;
    let mut rows = Vec::new();
    let mut first = true;

    for record in reader.records() {
        let record = record?;
        let row = Row::new(record.iter().map(String::from).collect());

        if first {
            first = false;
            if options.skip_first_row {
                continue;
            }
            if options.has_header {
                header = Some(row);
                continue;
            }
        }
        rows.push(row);
    }

    Ok(Table::new(header, rows))
}

/// Interpret a delimiter argument.
///
/// The literal two characters `\t` mean a tab, since passing a real tab on
/// the command line is painful; otherwise the first byte is taken, and an
/// empty argument falls back to a comma.
pub fn parse_delimiter(arg: &str) -> u8 {
    if arg == "\\t" {
        b'\t'
    } else {
        arg.as_bytes().first().copied().unwrap_or(b',')
    }
}
