//! Row filtering: the plain substring filter and the pipeline that
//! composes it with a where-clause filter.

use crate::query::WhereFilter;
use crate::table::Row;
use crate::utils::contains_ignore_case;

/// Check if any field of the row contains the pattern, case-insensitively.
/// An empty pattern matches every row.
pub fn row_matches_pattern(row: &Row, pattern: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }
    row.fields()
        .iter()
        .any(|field| contains_ignore_case(field, pattern))
}

/// Decides row inclusion by combining the substring filter with the
/// where-clause filter. A row is kept only when it passes both; either
/// filter may be absent.
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline {
    pattern: Option<String>,
    where_filter: WhereFilter,
}

impl FilterPipeline {
    /// A pipeline that keeps every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the substring pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the where-clause filter.
    pub fn with_where(mut self, filter: WhereFilter) -> Self {
        self.where_filter = filter;
        self
    }

    /// Whether any filtering is configured.
    pub fn is_active(&self) -> bool {
        self.pattern.as_deref().is_some_and(|p| !p.is_empty())
            || self.where_filter.root().is_some()
    }

    /// Resolve the where-clause column references against a header.
    pub fn resolve(&mut self, header: &Row) {
        self.where_filter.resolve(header);
    }

    /// Decide whether a row is included. The substring filter runs first,
    /// then the where clause.
    pub fn matches(&self, row: &Row) -> bool {
        if let Some(pattern) = &self.pattern {
            if !row_matches_pattern(row, pattern) {
                return false;
            }
        }
        self.where_filter.matches(row)
    }
}
