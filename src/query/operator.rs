//! Comparison operators accepted by `select`

use crate::table::error::{TableError, TableResult};
use std::fmt;
use std::str::FromStr;

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `==`, ASCII case-insensitive equality
    Eq,
    /// `!=`
    NotEq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    GtEq,
    /// `<=`
    LtEq,
    /// `LIKE`, case-insensitive substring containment
    Like,
}

impl Operator {
    /// Every operator, in the order they are documented
    pub const ALL: [Operator; 7] = [
        Operator::Eq,
        Operator::NotEq,
        Operator::Gt,
        Operator::Lt,
        Operator::GtEq,
        Operator::LtEq,
        Operator::Like,
    ];

    /// The operator's token spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::NotEq => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::GtEq => ">=",
            Operator::LtEq => "<=",
            Operator::Like => "LIKE",
        }
    }

    /// Returns true for operators that compare both sides as integers
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Operator::Gt | Operator::Lt | Operator::GtEq | Operator::LtEq
        )
    }
}

impl FromStr for Operator {
    type Err = TableError;

    /// Spelling must match exactly; `like` is not `LIKE`.
    fn from_str(s: &str) -> TableResult<Self> {
        Operator::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| TableError::InvalidOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
