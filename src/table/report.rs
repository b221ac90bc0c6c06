//! JSON report of a table's schema and rows
//!
//! The document has four keys, written in sorted order:
//!
//! ```text
//! {
//!     "attributes": [{"name": "age", "type": "int"}],
//!     "data": [{"__created_at__": "...", "__id__": "...", "__row__": "1", "age": "30"}],
//!     "name": "users",
//!     "numRows": 1
//! }
//! ```

use crate::table::{Attribute, Table};
use crate::types::Row;
use serde::ser::Error as _;
use serde::Serialize;

/// Borrowed view of a table for serialization
#[derive(Debug, Serialize)]
pub struct TableReport<'a> {
    pub attributes: &'a [Attribute],
    pub data: &'a [Row],
    pub name: &'a str,
    #[serde(rename = "numRows")]
    pub num_rows: usize,
}

impl Table {
    /// Build a serializable view of the schema and rows
    pub fn report(&self) -> TableReport<'_> {
        TableReport {
            attributes: self.attributes(),
            data: self.rows(),
            name: self.name(),
            num_rows: self.row_count(),
        }
    }

    /// Render the report as pretty JSON with four-space indentation
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.report().serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }
}
