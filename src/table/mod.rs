//! Table module for in-memory relational tables
//!
//! This module implements the table abstraction with the following features:
//! - Schema management over an ordered list of attributes
//! - Append-only row store with system columns stamped at insertion
//! - Single-predicate `select`
//! - JSON report of schema and rows
//! - Lock-protected handle for use across threads

pub mod attribute;
pub mod builder;
pub mod error;
pub mod report;
pub mod shared;
pub mod table;

pub use attribute::Attribute;
pub use builder::TableBuilder;
pub use error::{TableError, TableResult};
pub use report::TableReport;
pub use shared::SharedTable;
pub use table::Table;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
