//! Thread-safe table handle
//!
//! `Table` itself has no synchronization. `SharedTable` wraps it in a
//! reader-writer lock: lookups and `select` share the read lock, schema
//! changes and inserts take the write lock.

use crate::query::Condition;
use crate::table::error::TableResult;
use crate::table::{Attribute, Table};
use crate::types::Row;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, lock-protected handle to a `Table`
#[derive(Debug, Clone)]
pub struct SharedTable {
    inner: Arc<RwLock<Table>>,
}

impl SharedTable {
    pub fn new(table: Table) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    pub fn name(&self) -> String {
        self.inner.read().name().to_string()
    }

    pub fn add_attribute(&self, attribute: Attribute) {
        self.inner.write().add_attribute(attribute);
    }

    pub fn remove_attribute(&self, name: &str) {
        self.inner.write().remove_attribute(name);
    }

    pub fn get_attribute(&self, name: &str) -> TableResult<Attribute> {
        self.inner.read().get_attribute(name)
    }

    pub fn attributes(&self) -> Vec<Attribute> {
        self.inner.read().attributes().to_vec()
    }

    pub fn add_row<C: AsRef<str>, V: AsRef<str>>(
        &self,
        columns: &[C],
        values: &[V],
    ) -> TableResult<()> {
        self.inner.write().add_row(columns, values)
    }

    pub fn get_row(&self, index: usize) -> TableResult<Row> {
        self.inner.read().get_row(index)
    }

    pub fn get_rows(&self) -> Vec<Row> {
        self.inner.read().get_rows()
    }

    pub fn row_count(&self) -> usize {
        self.inner.read().row_count()
    }

    pub fn select<C: AsRef<str>, T: AsRef<str>>(
        &self,
        columns: &[C],
        condition_tokens: &[T],
    ) -> TableResult<Vec<Row>> {
        self.inner.read().select(columns, condition_tokens)
    }

    pub fn select_where(&self, condition: &Condition) -> TableResult<Vec<Row>> {
        self.inner.read().select_where(condition)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        self.inner.read().to_json()
    }

    /// Run `f` with a read guard held, for several reads in one snapshot
    pub fn with_read<R>(&self, f: impl FnOnce(&Table) -> R) -> R {
        f(&self.inner.read())
    }

    /// Unwrap the table if this is the last handle
    pub fn try_into_inner(self) -> Result<Table, SharedTable> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| SharedTable { inner })
    }
}

impl From<Table> for SharedTable {
    fn from(table: Table) -> Self {
        Self::new(table)
    }
}
