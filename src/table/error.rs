//! Table error definitions

use std::error::Error;
use std::fmt;

/// Table error types
///
/// Covers schema lookups, row access, row insertion, and predicate
/// evaluation during `select`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// No attribute with the given name
    NotFound(String),
    /// Index outside `[0, len)` for attribute or row access
    OutOfRange { index: usize, len: usize },
    /// Column and value sequences of different lengths in `add_row`
    ShapeMismatch { columns: usize, values: usize },
    /// Predicate with fewer than three tokens (carries the token count)
    InvalidCondition(usize),
    /// Unrecognized comparison operator
    InvalidOperator(String),
    /// Non-integer operand to an ordering comparison
    ParseError(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::NotFound(name) => write!(f, "Attribute not found: {}", name),
            TableError::OutOfRange { index, len } => {
                write!(f, "Invalid index: {} (length {})", index, len)
            }
            TableError::ShapeMismatch { columns, values } => write!(
                f,
                "Attributes and values do not match: {} columns, {} values",
                columns, values
            ),
            TableError::InvalidCondition(count) => {
                write!(f, "Invalid condition format: expected 3 tokens, got {}", count)
            }
            TableError::InvalidOperator(op) => write!(f, "Invalid operator: {}", op),
            TableError::ParseError(value) => write!(f, "Parse error: not an integer: {:?}", value),
        }
    }
}

impl Error for TableError {}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_display() {
        let err = TableError::NotFound("age".to_string());
        assert_eq!(err.to_string(), "Attribute not found: age");

        let err = TableError::InvalidOperator("=~".to_string());
        assert_eq!(err.to_string(), "Invalid operator: =~");

        let err = TableError::OutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Invalid index: 4 (length 2)");
    }

    #[test]
    fn test_table_error_shape_and_parse() {
        let err = TableError::ShapeMismatch { columns: 2, values: 1 };
        assert!(err.to_string().contains("2 columns, 1 values"));

        let err = TableError::ParseError("abc".to_string());
        assert_eq!(err.to_string(), "Parse error: not an integer: \"abc\"");

        let err = TableError::InvalidCondition(2);
        assert!(err.to_string().ends_with("got 2"));
    }
}
