//! Table structure: schema, row store, and single-predicate select

use crate::infrastructure::text::{join, to_upper};
use crate::infrastructure::{Clock, IdSource, RandomIdSource, SystemClock};
use crate::query::Condition;
use crate::table::error::{TableError, TableResult};
use crate::table::Attribute;
use crate::types::{
    NumericErrorPolicy, Row, TableConfig, CREATED_AT_COLUMN, ID_COLUMN, ROW_COLUMN,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// In-memory table
///
/// Owns an ordered list of attributes and an append-only list of rows.
/// The schema is permissive:
/// - attribute names may repeat; lookups return the first match
/// - rows may carry columns the schema does not declare, or lack declared ones
/// - removing an attribute leaves existing row data in place
///
/// Every inserted row is stamped with `__id__`, `__row__` and
/// `__created_at__`.
#[derive(Clone)]
pub struct Table {
    name: String,
    attributes: Vec<Attribute>,
    rows: Vec<Row>,
    row_count: usize,
    config: TableConfig,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
}

impl Table {
    /// Create an empty table with the given schema
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self::with_rows(name, attributes, Vec::new())
    }

    /// Create a table pre-populated with rows
    ///
    /// Rows are taken as-is: they are not checked against the schema and
    /// no system columns are added.
    pub fn with_rows(name: impl Into<String>, attributes: Vec<Attribute>, rows: Vec<Row>) -> Self {
        Self::from_parts(
            name.into(),
            attributes,
            rows,
            TableConfig::default(),
            Arc::new(RandomIdSource::new()),
            Arc::new(SystemClock::new()),
        )
    }

    pub(crate) fn from_parts(
        name: String,
        attributes: Vec<Attribute>,
        rows: Vec<Row>,
        config: TableConfig,
        ids: Arc<dyn IdSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let row_count = rows.len();
        Self {
            name,
            attributes,
            rows,
            row_count,
            config,
            ids,
            clock,
        }
    }

    /// Get table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get table configuration
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Get all attributes, in declaration order
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Get attribute count
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Append an attribute; duplicate names are allowed
    pub fn add_attribute(&mut self, attribute: Attribute) {
        debug!(table = %self.name, attribute = attribute.name(), "add attribute");
        self.attributes.push(attribute);
    }

    /// Remove the first attribute named `name`, if any
    pub fn remove_attribute(&mut self, name: &str) {
        if let Some(pos) = self.attributes.iter().position(|a| a.name() == name) {
            self.attributes.remove(pos);
            debug!(table = %self.name, attribute = name, "remove attribute");
        }
    }

    /// Get the first attribute named `name`
    pub fn get_attribute(&self, name: &str) -> TableResult<Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name() == name)
            .cloned()
            .ok_or_else(|| {
                error!(table = %self.name, attribute = name, "attribute not found");
                TableError::NotFound(name.to_string())
            })
    }

    /// Get the attribute at `index`
    pub fn get_attribute_at(&self, index: usize) -> TableResult<Attribute> {
        self.attributes.get(index).cloned().ok_or_else(|| {
            error!(table = %self.name, index, "invalid attribute index");
            TableError::OutOfRange {
                index,
                len: self.attributes.len(),
            }
        })
    }

    /// Append a row built from `columns[i] = values[i]`
    ///
    /// A repeated column keeps its last value. System columns are written
    /// after the caller's pairs and overwrite any caller value.
    pub fn add_row<C: AsRef<str>, V: AsRef<str>>(
        &mut self,
        columns: &[C],
        values: &[V],
    ) -> TableResult<()> {
        if columns.len() != values.len() {
            error!(
                table = %self.name,
                columns = columns.len(),
                values = values.len(),
                "attributes and values do not match"
            );
            return Err(TableError::ShapeMismatch {
                columns: columns.len(),
                values: values.len(),
            });
        }

        let mut row: Row = columns
            .iter()
            .zip(values)
            .map(|(c, v)| (c.as_ref().to_string(), v.as_ref().to_string()))
            .collect();

        let ordinal = self.row_count + 1;
        row.insert(ID_COLUMN.to_string(), self.ids.next_id());
        row.insert(ROW_COLUMN.to_string(), ordinal.to_string());
        row.insert(CREATED_AT_COLUMN.to_string(), self.clock.now());

        self.rows.push(row);
        self.row_count = ordinal;
        Ok(())
    }

    /// Get a copy of the row at `index`
    pub fn get_row(&self, index: usize) -> TableResult<Row> {
        if index >= self.row_count {
            error!(table = %self.name, index, "invalid row index");
            return Err(TableError::OutOfRange {
                index,
                len: self.row_count,
            });
        }
        Ok(self.rows[index].clone())
    }

    /// Get a copy of every row
    pub fn get_rows(&self) -> Vec<Row> {
        self.rows.clone()
    }

    /// Borrow the row store
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get row count
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Return copies of the rows matching `[attribute, operator, literal]`
    ///
    /// `columns` is accepted for call-site compatibility but not used:
    /// matching rows are returned whole.
    pub fn select<C: AsRef<str>, T: AsRef<str>>(
        &self,
        _columns: &[C],
        condition_tokens: &[T],
    ) -> TableResult<Vec<Row>> {
        let condition = Condition::from_tokens(condition_tokens)?;
        self.select_where(&condition)
    }

    /// Return copies of the rows matching a parsed condition, in storage order
    pub fn select_where(&self, condition: &Condition) -> TableResult<Vec<Row>> {
        let mut result = Vec::new();

        for row in &self.rows {
            let matched = match condition.matches(row, self.config.case_mode) {
                Ok(matched) => matched,
                Err(err @ TableError::ParseError(_)) => match self.config.numeric_errors {
                    NumericErrorPolicy::Abort => {
                        error!(table = %self.name, condition = %condition, error = %err, "select aborted");
                        return Err(err);
                    }
                    NumericErrorPolicy::SkipRow => {
                        warn!(table = %self.name, row = ?row.get(ROW_COLUMN), error = %err, "row skipped");
                        false
                    }
                },
                Err(err) => return Err(err),
            };

            if matched {
                if self.config.log_matches {
                    info!(table = %self.name, row = ?row.get(ROW_COLUMN), "match found");
                }
                result.push(row.clone());
            }
        }

        Ok(result)
    }
}

impl fmt::Display for Table {
    /// One-line summary, e.g. `users(age INT, name STRING) [2 rows]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<String> = self
            .attributes
            .iter()
            .map(|a| format!("{} {}", a.name(), to_upper(a.attribute_type())))
            .collect();
        write!(
            f,
            "{}({}) [{} rows]",
            self.name,
            join(&columns, ", "),
            self.row_count
        )
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("rows", &self.rows)
            .field("row_count", &self.row_count)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{FixedClock, SequentialIdSource};

    fn users() -> Table {
        Table::from_parts(
            "users".to_string(),
            vec![Attribute::new("age", "int"), Attribute::new("name", "string")],
            Vec::new(),
            TableConfig::default(),
            Arc::new(SequentialIdSource::new("u")),
            Arc::new(FixedClock::new("2024-01-01 00:00:00")),
        )
    }

    #[test]
    fn test_table_new() {
        let table = Table::new("users", vec![Attribute::new("age", "int")]);
        assert_eq!(table.name(), "users");
        assert_eq!(table.attribute_count(), 1);
        assert_eq!(table.row_count(), 0);
        assert!(table.rows().is_empty());
    }

    #[test]
    fn test_add_row_stamps_system_columns() {
        let mut table = users();
        table.add_row(&["age"], &["30"]).unwrap();

        let row = table.get_row(0).unwrap();
        assert_eq!(row.get("age").map(String::as_str), Some("30"));
        assert_eq!(row.get(ID_COLUMN).map(String::as_str), Some("u-1"));
        assert_eq!(row.get(ROW_COLUMN).map(String::as_str), Some("1"));
        assert_eq!(
            row.get(CREATED_AT_COLUMN).map(String::as_str),
            Some("2024-01-01 00:00:00")
        );
    }

    #[test]
    fn test_add_row_shape_mismatch() {
        let mut table = users();
        let result = table.add_row(&["age", "name"], &["30"]);
        assert_eq!(
            result,
            Err(TableError::ShapeMismatch {
                columns: 2,
                values: 1
            })
        );
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_display() {
        let mut table = users();
        table.add_row(&["age"], &["30"]).unwrap();
        assert_eq!(table.to_string(), "users(age INT, name STRING) [1 rows]");
    }
}
