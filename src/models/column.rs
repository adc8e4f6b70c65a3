//! Column model for the SDK

use serde::{Deserialize, Serialize};

/// Column model representing a single named field in a table
///
/// # Example
///
/// ```rust
/// use data_validation_sdk::models::Column;
///
/// let column = Column::new("id".to_string(), "INT".to_string());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    /// Column name, unique within its table
    pub name: String,
    /// Data type (e.g., "INT", "VARCHAR(100)")
    pub data_type: String,
    /// Whether the column allows NULL values (default: true)
    #[serde(default = "default_true")]
    pub nullable: bool,
    /// Column description/documentation
    #[serde(default)]
    pub description: String,
}

fn default_true() -> bool {
    true
}

impl Column {
    /// Create a new column with the given name and data type
    ///
    /// The column defaults to nullable with an empty description.
    pub fn new(name: String, data_type: String) -> Self {
        Self {
            name,
            data_type,
            nullable: true,
            description: String::new(),
        }
    }
}
