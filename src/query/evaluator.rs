//! Per-row evaluation of conditions and expression trees.

use crate::table::Row;
use crate::utils::{contains_ignore_case, parse_number};

use super::ast::{CompareOp, Condition, Expr, LogicOp};

/// Evaluate a single condition against a row.
///
/// Never fails: an unresolved column, an out-of-range index, or a
/// non-numeric side under a relational operator all evaluate to false.
pub fn evaluate_condition(condition: &Condition, row: &Row) -> bool {
    let Some(index) = condition.column_index else {
        return false;
    };
    let Some(field) = row.get(index) else {
        return false;
    };

    // The value was trimmed at parse time; the field is trimmed here.
    let field = field.trim();
    let value = condition.value.as_str();

    match condition.op {
        CompareOp::Contains => contains_ignore_case(field, value),
        CompareOp::Equals => field.eq_ignore_ascii_case(value),
        CompareOp::NotEquals => !field.eq_ignore_ascii_case(value),
        CompareOp::Greater => compare_numbers(field, value, |f, v| f > v),
        CompareOp::Less => compare_numbers(field, value, |f, v| f < v),
        CompareOp::GreaterEq => compare_numbers(field, value, |f, v| f >= v),
        CompareOp::LessEq => compare_numbers(field, value, |f, v| f <= v),
    }
}

/// Both sides must parse completely as numbers, otherwise the comparison is
/// false rather than an error.
fn compare_numbers(field: &str, value: &str, cmp: impl FnOnce(f64, f64) -> bool) -> bool {
    match (parse_number(field), parse_number(value)) {
        (Some(field_num), Some(value_num)) => cmp(field_num, value_num),
        _ => false,
    }
}

/// Evaluate an expression tree against a row.
///
/// Logic nodes evaluate their left child first and short-circuit: AND skips
/// the right child when the left is false, OR when the left is true. The
/// ordering is part of the contract.
pub fn evaluate_expr(expr: &Expr, row: &Row) -> bool {
    match expr {
        Expr::Condition(condition) => evaluate_condition(condition, row),
        Expr::Logic { op, left, right } => {
            let left_result = evaluate_expr(left, row);
            match op {
                LogicOp::And => left_result && evaluate_expr(right, row),
                LogicOp::Or => left_result || evaluate_expr(right, row),
            }
        }
    }
}
