//! Global type definitions
//!
//! Stores the row representation, system column names, and the
//! configuration types shared by the table and query modules.

use std::collections::BTreeMap;
use std::fmt;

/// A stored record: column name to string value
pub type Row = BTreeMap<String, String>;

/// System column holding the row's unique identifier
pub const ID_COLUMN: &str = "__id__";

/// System column holding the 1-based insertion ordinal
pub const ROW_COLUMN: &str = "__row__";

/// System column holding the insertion timestamp
pub const CREATED_AT_COLUMN: &str = "__created_at__";

/// All system columns, in the order they are stamped
pub const SYSTEM_COLUMNS: [&str; 3] = [ID_COLUMN, ROW_COLUMN, CREATED_AT_COLUMN];

/// Returns true if `name` is one of the injected system columns.
pub fn is_system_column(name: &str) -> bool {
    SYSTEM_COLUMNS.contains(&name)
}

/// How `==` and `!=` treat letter case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// `==` ignores ASCII case, `!=` is case-sensitive.
    ///
    /// Under this mode "Foo" and "foo" satisfy both operators.
    #[default]
    Compatibility,
    /// Both operators ignore ASCII case; `!=` is the negation of `==`
    Insensitive,
}

/// What an ordering comparison does with a non-integer operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericErrorPolicy {
    /// Abort the whole select with a parse error
    #[default]
    Abort,
    /// Log a warning and treat the row as non-matching
    SkipRow,
}

/// Table configuration
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Case handling for equality operators
    pub case_mode: CaseMode,
    /// Handling of unparsable operands in `>`, `<`, `>=`, `<=`
    pub numeric_errors: NumericErrorPolicy,
    /// Whether each select match emits an info event
    pub log_matches: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            case_mode: CaseMode::Compatibility,
            numeric_errors: NumericErrorPolicy::Abort,
            log_matches: true,
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Debug level
    Debug,
    /// Info level
    #[default]
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter())
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_system_columns() {
        assert!(is_system_column("__id__"));
        assert!(is_system_column("__row__"));
        assert!(is_system_column("__created_at__"));
        assert!(!is_system_column("age"));
        assert!(!is_system_column("__ID__"));
    }

    #[test]
    fn test_config_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.case_mode, CaseMode::Compatibility);
        assert_eq!(config.numeric_errors, NumericErrorPolicy::Abort);
        assert!(config.log_matches);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogLevel::Warn.as_filter(), "warn");
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }
}
