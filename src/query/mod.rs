//! WHERE-clause query engine.
//!
//! This module turns a query string like `(age > 25 OR status = active) AND
//! name contains john` into a boolean expression tree and evaluates it
//! against table rows:
//! - ast: condition and expression tree definitions
//! - parser: recursive-descent parsing of the query grammar
//! - evaluator: per-row condition evaluation and the short-circuit tree walk
//! - engine: the [`WhereFilter`] parse → resolve → match lifecycle

mod ast;
mod engine;
mod evaluator;
mod parser;

pub use ast::{CompareOp, Condition, Expr, LogicOp};
pub use engine::WhereFilter;
pub use evaluator::{evaluate_condition, evaluate_expr};
pub use parser::Parser;
