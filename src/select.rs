//! Column hiding, selection and the visible-column mapping.
//!
//! Both features reduce to one thing the renderers consume: an ordered
//! mapping from visible position to actual column index. Selection defines
//! both membership and order; without a selection, hiding subtracts from
//! the natural column order.

use std::collections::HashSet;

use crate::table::Row;

/// Set of column indices excluded from output. Scoped to one invocation.
#[derive(Debug, Clone, Default)]
pub struct HiddenColumns {
    indices: HashSet<usize>,
}

impl HiddenColumns {
    /// Parse a comma-separated index list like `0,2,5`.
    ///
    /// Invalid entries warn and are skipped; the rest still apply.
    pub fn parse(spec: &str) -> Self {
        let mut indices = HashSet::new();
        for token in spec.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match token.parse::<usize>() {
                Ok(index) => {
                    indices.insert(index);
                }
                Err(_) => log::warn!("invalid column index '{token}', skipping"),
            }
        }
        Self { indices }
    }

    /// Check if a column is hidden.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Whether no columns are hidden.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Ordered column selection, e.g. `name,age` or `0,2,1`.
#[derive(Debug, Clone)]
pub struct ColumnSelection {
    indices: Vec<usize>,
}

impl ColumnSelection {
    /// Parse a selection string. Each token is tried as a non-negative
    /// integer index first, then resolved as a column name against the
    /// header. Unresolvable tokens warn and are skipped. Returns `None`
    /// when nothing resolved.
    pub fn parse(spec: &str, header: Option<&Row>) -> Option<Self> {
        let mut indices = Vec::new();

        for token in spec.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if let Ok(index) = token.parse::<usize>() {
                indices.push(index);
            } else if let Some(header) = header {
                match header.find_column(token) {
                    Some(index) => indices.push(index),
                    None => log::warn!("column '{token}' not found, skipping"),
                }
            } else {
                log::warn!("cannot resolve column name '{token}' without header");
            }
        }

        if indices.is_empty() {
            None
        } else {
            Some(Self { indices })
        }
    }

    /// The selected column indices in output order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

/// Build the visible-column mapping: visible position -> actual column
/// index. A selection wins outright; otherwise hidden columns are dropped
/// from the natural order.
pub fn column_mapping(
    column_count: usize,
    selection: Option<&ColumnSelection>,
    hidden: &HiddenColumns,
) -> Vec<usize> {
    match selection {
        Some(selection) => selection.indices().to_vec(),
        None => (0..column_count).filter(|i| !hidden.contains(*i)).collect(),
    }
}
