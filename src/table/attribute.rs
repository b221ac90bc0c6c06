//! Attribute structure for table schema definition

use serde::Serialize;

/// Schema entry: a column name and its declared type
///
/// The type is an advisory label such as `"int"` or `"string"`. Stored
/// values are always strings and are never checked against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Attribute name
    name: String,
    /// Declared type label
    #[serde(rename = "type")]
    attribute_type: String,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(name: impl Into<String>, attribute_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute_type: attribute_type.into(),
        }
    }

    /// Get attribute name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get declared type label
    pub fn attribute_type(&self) -> &str {
        &self.attribute_type
    }
}
