//! Output rendering.
//!
//! Every format consumes the same [`TableView`]: the header, the surviving
//! rows, and the visible-column mapping. The renderers only read; all
//! filtering, sorting and column shaping happened before this point.

mod delimited;
mod html;
mod json;
mod markdown;
mod spreadsheet;
mod table;

use std::io::Write;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::table::Row;

pub use delimited::{write_csv, write_tsv};
pub use html::write_html;
pub use json::write_json;
pub use markdown::write_markdown;
pub use spreadsheet::write_spreadsheet_xml;
pub use table::write_ascii_table;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned ASCII table (default)
    #[default]
    Table,
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
    /// JSON array of objects
    Json,
    /// Markdown table
    Markdown,
    /// HTML table
    Html,
    /// Excel 2003 SpreadsheetML workbook
    Xml,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "xml" => Ok(Self::Xml),
            other => Err(Error::Format(format!("unknown output format '{other}'"))),
        }
    }
}

/// A render-ready view of the table: filtered rows in output order plus the
/// visible-column mapping.
pub struct TableView<'a> {
    /// Header row, when the input declared one.
    pub header: Option<&'a Row>,
    /// Rows that survived filtering, already sorted.
    pub rows: Vec<&'a Row>,
    /// Mapping from visible position to actual column index.
    pub columns: Vec<usize>,
    /// Data-row count before filtering.
    pub total_rows: usize,
    /// Whether any filter was active.
    pub filtered: bool,
}

impl<'a> TableView<'a> {
    /// Cell text for a visible position, empty when the row is short.
    pub fn cell(&self, row: &'a Row, visible: usize) -> &'a str {
        row.get(self.columns[visible]).unwrap_or("")
    }

    /// Trimmed header text for a visible position, empty when absent.
    pub fn header_cell(&self, visible: usize) -> &'a str {
        self.header
            .and_then(|h| h.get(self.columns[visible]))
            .unwrap_or("")
            .trim()
    }

    /// Column key for key-value formats: the trimmed header cell, or a
    /// positional `column_N` name when there is no usable header.
    pub fn column_key(&self, visible: usize) -> String {
        let name = self.header_cell(visible);
        if name.is_empty() {
            format!("column_{}", self.columns[visible])
        } else {
            name.to_string()
        }
    }

    /// Number of visible columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Render the view in the requested format.
pub fn render<W: Write>(
    out: &mut W,
    view: &TableView,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_ascii_table(out, view, color),
        OutputFormat::Csv => write_csv(out, view),
        OutputFormat::Tsv => write_tsv(out, view),
        OutputFormat::Json => write_json(out, view),
        OutputFormat::Markdown => write_markdown(out, view),
        OutputFormat::Html => write_html(out, view),
        OutputFormat::Xml => write_spreadsheet_xml(out, view),
    }
}
