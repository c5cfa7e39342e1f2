//! The [`WhereFilter`] lifecycle: parse once, resolve once a header is
//! available, evaluate once per data row.

use crate::error::Result;
use crate::table::Row;

use super::ast::Expr;
use super::evaluator::evaluate_expr;
use super::parser::Parser;

/// A parsed where-clause filter.
///
/// A filter with no root passes every row, so a `WhereFilter` can always be
/// consulted whether or not the user supplied a query.
#[derive(Debug, Clone, Default)]
pub struct WhereFilter {
    root: Option<Expr>,
}

impl WhereFilter {
    /// A filter that passes everything.
    pub fn pass_all() -> Self {
        Self::default()
    }

    /// Parse a query string into a filter.
    pub fn parse(query: &str) -> Result<Self> {
        let root = Parser::new(query).parse()?;
        Ok(Self { root: Some(root) })
    }

    /// The parsed expression tree, if any.
    pub fn root(&self) -> Option<&Expr> {
        self.root.as_ref()
    }

    /// Bind column names to indices using the header row.
    ///
    /// Walks the tree depth-first and resolves every still-unbound leaf by
    /// case-insensitive, trimmed match against the header. A name missing
    /// from the header warns and leaves the leaf unresolved; that condition
    /// then evaluates to false for every row. Idempotent: leaves already
    /// bound are skipped.
    pub fn resolve(&mut self, header: &Row) {
        if let Some(root) = &mut self.root {
            resolve_expr(root, header);
        }
    }

    /// Evaluate the filter against a row. A filter without a root is
    /// "no filter configured" and matches everything.
    pub fn matches(&self, row: &Row) -> bool {
        match &self.root {
            None => true,
            Some(root) => evaluate_expr(root, row),
        }
    }
}

fn resolve_expr(expr: &mut Expr, header: &Row) {
    match expr {
        Expr::Logic { left, right, .. } => {
            resolve_expr(left, header);
            resolve_expr(right, header);
        }
        Expr::Condition(condition) => {
            if condition.column_index.is_none() {
                match header.find_column(&condition.column_name) {
                    Some(index) => condition.column_index = Some(index),
                    None => log::warn!(
                        "column '{}' in where clause not found in header",
                        condition.column_name
                    ),
                }
            }
        }
    }
}
