//! Recursive-descent parser for where-clause expressions.
//!
//! Grammar, with AND binding tighter than OR and parentheses overriding:
//!
//! ```text
//! Expression := Term ( "OR" Term )*
//! Term       := Factor ( "AND" Factor )*
//! Factor     := "(" Expression ")" | Condition
//! ```
//!
//! A Condition is a raw text run ending at a parenthesis or at an
//! unparenthesized ` AND ` / ` OR ` boundary; the run itself is then split
//! on the first recognized comparison operator.

use crate::error::{Error, Result};
use crate::utils::find_ignore_case;

use super::ast::{CompareOp, Condition, Expr, LogicOp};

/// Operator symbols in match priority order: longest first, so that `>=`
/// can never be misread as `>` followed by a stray `=`.
const OPERATORS: [(&str, CompareOp); 7] = [
    ("contains", CompareOp::Contains),
    (">=", CompareOp::GreaterEq),
    ("<=", CompareOp::LessEq),
    ("!=", CompareOp::NotEquals),
    (">", CompareOp::Greater),
    ("<", CompareOp::Less),
    ("=", CompareOp::Equals),
];

/// Parser for where-clause query strings.
///
/// One left-to-right pass over the input with constant lookahead; the only
/// state is a byte cursor. All boundary characters are ASCII, so the cursor
/// always lands on a char boundary.
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over a query string.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the full input into an expression tree.
    ///
    /// The entire input must be consumed, modulo trailing whitespace;
    /// anything left over fails the whole query.
    pub fn parse(mut self) -> Result<Expr> {
        let expr = self.parse_expression()?;
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(Error::QueryParse(format!(
                "unexpected characters at end of where clause: '{}'",
                &self.input[self.pos..]
            )));
        }
        Ok(expr)
    }

    /// Expression := Term ( "OR" Term )*
    fn parse_expression(&mut self) -> Result<Expr> {
        let mut left = self.parse_term()?;

        while self.match_keyword("OR") {
            let right = self
                .parse_term()
                .map_err(|_| Error::QueryParse("missing operand after OR".to_string()))?;
            left = Expr::Logic {
                op: LogicOp::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Term := Factor ( "AND" Factor )*
    fn parse_term(&mut self) -> Result<Expr> {
        let mut left = self.parse_factor()?;

        while self.match_keyword("AND") {
            let right = self
                .parse_factor()
                .map_err(|_| Error::QueryParse("missing operand after AND".to_string()))?;
            left = Expr::Logic {
                op: LogicOp::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Factor := "(" Expression ")" | Condition
    fn parse_factor(&mut self) -> Result<Expr> {
        self.skip_whitespace();

        if self.match_symbol('(') {
            let expr = self.parse_expression()?;
            if !self.match_symbol(')') {
                return Err(Error::QueryParse("mismatched parentheses".to_string()));
            }
            return Ok(expr);
        }

        let raw = self.take_condition_run();
        if raw.trim().is_empty() {
            return Err(Error::QueryParse("empty condition".to_string()));
        }

        Ok(Expr::Condition(parse_condition(raw)?))
    }

    /// Consume a raw condition run: everything up to a parenthesis or an
    /// unparenthesized ` AND ` / ` OR ` boundary (case-insensitive, spaces
    /// required around the keyword).
    fn take_condition_run(&mut self) -> &'a str {
        let rest = &self.input.as_bytes()[self.pos..];
        let mut end = rest.len();

        for i in 0..rest.len() {
            if rest[i] == b'(' || rest[i] == b')' {
                end = i;
                break;
            }
            if starts_with_ignore_case(&rest[i..], b" AND ")
                || starts_with_ignore_case(&rest[i..], b" OR ")
            {
                end = i;
                break;
            }
        }

        let run = &self.input[self.pos..self.pos + end];
        self.pos += end;
        run
    }

    /// Try to consume a keyword at the cursor (after optional whitespace).
    ///
    /// Keywords are matched case-insensitively and must be followed by a
    /// non-identifier character, so a column literally named "android" is
    /// never split at its embedded "and".
    fn match_keyword(&mut self, keyword: &str) -> bool {
        let saved = self.pos;
        self.skip_whitespace();

        let rest = &self.input[self.pos..];
        if rest.len() >= keyword.len() && rest[..keyword.len()].eq_ignore_ascii_case(keyword) {
            let boundary = rest[keyword.len()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_ascii_alphanumeric() && c != '_');
            if boundary {
                self.pos += keyword.len();
                return true;
            }
        }

        self.pos = saved;
        false
    }

    /// Try to consume a single symbol at the cursor (after optional whitespace).
    fn match_symbol(&mut self, symbol: char) -> bool {
        let saved = self.pos;
        self.skip_whitespace();
        if self.input[self.pos..].starts_with(symbol) {
            self.pos += symbol.len_utf8();
            return true;
        }
        self.pos = saved;
        false
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }
}

fn starts_with_ignore_case(bytes: &[u8], prefix: &[u8]) -> bool {
    bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Split a raw condition run like `age >= 25` into a [`Condition`].
///
/// Operator classes are tried longest-to-shortest (`contains`, then the
/// two-character relational operators, then the single-character ones); the
/// first class with any occurrence wins and splits at its leftmost match.
/// The column name must be non-empty; the value may be empty.
fn parse_condition(raw: &str) -> Result<Condition> {
    let raw = raw.trim();

    for (symbol, op) in OPERATORS {
        if let Some(pos) = find_ignore_case(raw, symbol) {
            let column = raw[..pos].trim();
            let value = raw[pos + symbol.len()..].trim();

            if column.is_empty() {
                return Err(Error::QueryParse(format!(
                    "missing column name in condition '{raw}'"
                )));
            }

            return Ok(Condition::new(
                column.to_string(),
                op,
                value.to_string(),
            ));
        }
    }

    Err(Error::QueryParse(format!(
        "no recognized operator in condition '{raw}'"
    )))
}
