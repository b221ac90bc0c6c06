//! Predicate parsing and per-row evaluation

use crate::infrastructure::text::to_lower;
use crate::query::Operator;
use crate::table::error::{TableError, TableResult};
use crate::types::{CaseMode, Row};
use std::fmt;
use tracing::error;

/// A parsed `attribute operator literal` predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    attribute: String,
    operator: Operator,
    literal: String,
}

impl Condition {
    /// Create a condition from already-unquoted parts
    pub fn new(attribute: impl Into<String>, operator: Operator, literal: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            operator,
            literal: literal.into(),
        }
    }

    /// Parse `[attribute, operator, literal]`
    ///
    /// Tokens past the third are ignored. The literal loses one leading and
    /// one trailing double quote, each only if present.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> TableResult<Self> {
        if tokens.len() < 3 {
            error!(tokens = tokens.len(), "invalid condition format");
            return Err(TableError::InvalidCondition(tokens.len()));
        }

        let attribute = tokens[0].as_ref();
        let op = tokens[1].as_ref();
        let literal = strip_quotes(tokens[2].as_ref());

        let operator = op.parse::<Operator>().inspect_err(|_| {
            error!(operator = op, "invalid operator");
        })?;

        Ok(Self::new(attribute, operator, literal))
    }

    /// Parse a predicate written as text, e.g. `name == "Ada Lovelace"`
    pub fn parse(text: &str) -> TableResult<Self> {
        Self::from_tokens(&tokenize(text))
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Evaluate the predicate against one row.
    ///
    /// A row without the attribute never matches. Ordering operators parse
    /// the row value first, then the literal; the first failure is returned
    /// as `ParseError`.
    pub fn matches(&self, row: &Row, case_mode: CaseMode) -> TableResult<bool> {
        let Some(value) = row.get(&self.attribute) else {
            return Ok(false);
        };

        let matched = match self.operator {
            Operator::Eq => value.eq_ignore_ascii_case(&self.literal),
            Operator::NotEq => match case_mode {
                CaseMode::Compatibility => *value != self.literal,
                CaseMode::Insensitive => !value.eq_ignore_ascii_case(&self.literal),
            },
            Operator::Gt | Operator::Lt | Operator::GtEq | Operator::LtEq => {
                let lhs = parse_leading_int(value)?;
                let rhs = parse_leading_int(&self.literal)?;
                match self.operator {
                    Operator::Gt => lhs > rhs,
                    Operator::Lt => lhs < rhs,
                    Operator::GtEq => lhs >= rhs,
                    _ => lhs <= rhs,
                }
            }
            Operator::Like => to_lower(value).contains(&to_lower(&self.literal)),
        };

        Ok(matched)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.attribute, self.operator, self.literal)
    }
}

/// Strip one leading and one trailing `"`, independently
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

/// Parse a 32-bit integer from the start of `s`.
///
/// Leading whitespace is skipped, an optional sign is accepted, and anything
/// after the leading digits is ignored, so `" 42px"` reads as 42. No digits,
/// or a value outside `i32`, is a `ParseError`.
pub(crate) fn parse_leading_int(s: &str) -> TableResult<i32> {
    let trimmed = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        return Err(TableError::ParseError(s.to_string()));
    }

    trimmed[..end]
        .parse::<i32>()
        .map_err(|_| TableError::ParseError(s.to_string()))
}

/// Split predicate text into tokens.
///
/// Whitespace separates tokens except inside double quotes; quoted segments
/// keep their quotes so `Condition::from_tokens` can strip them.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in text.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            current.push(c);
        } else if c.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
