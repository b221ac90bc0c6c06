//! TableBuilder for fluent table construction
//!
//! Provides a builder pattern for creating tables with:
//! - Attribute definition
//! - Pre-populated rows
//! - Injected id source and clock
//! - Table configuration

use crate::infrastructure::{Clock, IdSource, RandomIdSource, SystemClock};
use crate::table::{Attribute, Table};
use crate::types::{Row, TableConfig};
use std::sync::Arc;

/// Builder for constructing Table instances
///
/// # Example
/// ```
/// use memtable::infrastructure::{FixedClock, SequentialIdSource};
/// use memtable::table::{Attribute, TableBuilder};
///
/// let mut table = TableBuilder::new("users")
///     .attribute(Attribute::new("age", "int"))
///     .attribute(Attribute::new("name", "string"))
///     .id_source(SequentialIdSource::new("user"))
///     .clock(FixedClock::new("2024-01-01 00:00:00"))
///     .build();
///
/// table.add_row(&["age", "name"], &["30", "Ada"]).unwrap();
/// assert_eq!(table.get_row(0).unwrap()["__id__"], "user-1");
/// ```
pub struct TableBuilder {
    name: String,
    attributes: Vec<Attribute>,
    rows: Vec<Row>,
    config: TableConfig,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
}

impl TableBuilder {
    /// Create a new table builder with the table name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            rows: Vec::new(),
            config: TableConfig::default(),
            ids: Arc::new(RandomIdSource::new()),
            clock: Arc::new(SystemClock::new()),
        }
    }

    /// Add a single attribute
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add multiple attributes at once
    pub fn attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Pre-populate rows (taken as-is, without system columns)
    pub fn rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    /// Set the table configuration
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the source of `__id__` values
    pub fn id_source<I: IdSource + 'static>(mut self, ids: I) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Share an id source with other tables
    pub fn shared_id_source(mut self, ids: Arc<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Set the source of `__created_at__` values
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build the table
    pub fn build(self) -> Table {
        Table::from_parts(
            self.name,
            self.attributes,
            self.rows,
            self.config,
            self.ids,
            self.clock,
        )
    }
}
