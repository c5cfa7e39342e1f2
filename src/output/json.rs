//! JSON output: an array of objects, one per row.

use std::io::Write;

use serde_json::{Map, Value};

use crate::error::Result;

use super::TableView;

/// Render the view as a JSON array of objects. Keys come from the trimmed
/// header cells (or positional `column_N` names without a header); both
/// keys and values are whitespace-trimmed.
pub fn write_json<W: Write>(out: &mut W, view: &TableView) -> Result<()> {
    let records: Vec<Value> = view
        .rows
        .iter()
        .map(|row| {
            let mut object = Map::new();
            for i in 0..view.column_count() {
                object.insert(
                    view.column_key(i),
                    Value::String(view.cell(row, i).trim().to_string()),
                );
            }
            Value::Object(object)
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &Value::Array(records))?;
    writeln!(out)?;
    Ok(())
}
