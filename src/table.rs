//! Row-oriented table model.
//!
//! A [`Table`] is what the reader produces: an optional header row plus the
//! data rows, each an ordered sequence of text fields. Rows are immutable
//! once parsed; everything downstream (filtering, sorting, rendering) only
//! reads them.

/// One record of the input table: an ordered sequence of text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    /// Create a row from its fields.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Get a field by column index. Indices beyond the row's length return
    /// `None` (the row was shorter than the header promised).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of fields in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All fields in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Find a column index by name.
    ///
    /// Header cells are trimmed and compared case-insensitively; the first
    /// matching column wins when header names are not unique.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|cell| cell.trim().eq_ignore_ascii_case(name))
    }
}

impl From<Vec<&str>> for Row {
    fn from(fields: Vec<&str>) -> Self {
        Self::new(fields.into_iter().map(String::from).collect())
    }
}

/// An in-memory table: an optional header row and the data rows.
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Option<Row>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table from its parts.
    pub fn new(header: Option<Row>, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// The header row, if the input declared one.
    pub fn header(&self) -> Option<&Row> {
        self.header.as_ref()
    }

    /// Number of data rows (the header is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, taken from the header or the first data row.
    pub fn column_count(&self) -> usize {
        self.header
            .as_ref()
            .or_else(|| self.rows.first())
            .map_or(0, Row::len)
    }

    /// The data rows in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Mutable access to the data rows, for in-place sorting.
    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Check whether the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
