//! Memtable in-memory table library

// Global type definitions
pub mod types;

// Import various modules
pub mod infrastructure;
pub mod query;
pub mod table;

// Re-export table items for easier access
pub use table::{Attribute, SharedTable, Table, TableBuilder, TableError, TableResult};

// Re-export query items for easier access
pub use query::{Condition, Operator};
