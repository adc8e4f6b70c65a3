//! Column presence checking
//!
//! Verifies that a table contains a required set of named columns and,
//! when it does not, produces a diagnostic listing the missing ones.

use thiserror::Error;
use tracing::debug;

use crate::models::Table;

/// Error returned when a table is missing one or more required columns.
///
/// The `Display` output is the caller-facing diagnostic; the variant
/// fields carry the same information in structured form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MissingColumnsError {
    /// Exactly one required column is absent
    #[error("The table {table_name} did not contain the required column: {column}.")]
    Single { table_name: String, column: String },

    /// Two or more required columns are absent
    #[error(
        "The table {table_name} did not contain any of the required columns: {joined}.",
        joined = .columns.join(", ")
    )]
    Multiple {
        table_name: String,
        columns: Vec<String>,
    },
}

impl MissingColumnsError {
    /// The missing column names, in the order they were required
    pub fn missing_columns(&self) -> Vec<&str> {
        match self {
            Self::Single { column, .. } => vec![column.as_str()],
            Self::Multiple { columns, .. } => columns.iter().map(String::as_str).collect(),
        }
    }

    /// Name of the table that failed the check
    pub fn table_name(&self) -> &str {
        match self {
            Self::Single { table_name, .. } | Self::Multiple { table_name, .. } => table_name,
        }
    }
}

/// Check that `table` contains every column named in `required`.
///
/// Column names are compared exactly (case-sensitive). An empty
/// `required` list is trivially satisfied. Missing names are reported
/// in the order they appear in `required`.
///
/// # Example
///
/// ```rust
/// use data_validation_sdk::models::{Column, Table};
/// use data_validation_sdk::validation::tables::check_required_columns;
///
/// let table = Table::new(
///     "users".to_string(),
///     vec![Column::new("id".to_string(), "INT".to_string())],
/// );
///
/// assert!(check_required_columns(&table, &["id"]).is_ok());
/// assert!(check_required_columns(&table, &["id", "email"]).is_err());
/// ```
pub fn check_required_columns(
    table: &Table,
    required: &[&str],
) -> Result<(), MissingColumnsError> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !table.has_column(name))
        .collect();

    match missing.as_slice() {
        [] => Ok(()),
        [column] => {
            debug!(table = %table.name, %column, "required column missing");
            Err(MissingColumnsError::Single {
                table_name: table.name.clone(),
                column: (*column).to_string(),
            })
        }
        columns => {
            debug!(table = %table.name, ?columns, "required columns missing");
            Err(MissingColumnsError::Multiple {
                table_name: table.name.clone(),
                columns: columns.iter().map(|name| (*name).to_string()).collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    fn table_with(names: &[&str]) -> Table {
        let columns = names
            .iter()
            .map(|name| Column::new((*name).to_string(), "TEXT".to_string()))
            .collect();
        Table::new("orders".to_string(), columns)
    }

    #[test]
    fn test_empty_required_list_is_valid() {
        let table = table_with(&[]);
        assert!(check_required_columns(&table, &[]).is_ok());
    }

    #[test]
    fn test_single_missing_column_message() {
        let table = table_with(&["id"]);
        let err = check_required_columns(&table, &["id", "amount"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The table orders did not contain the required column: amount."
        );
        assert_eq!(err.missing_columns(), vec!["amount"]);
        assert_eq!(err.table_name(), "orders");
    }

    #[test]
    fn test_multiple_missing_columns_preserve_required_order() {
        let table = table_with(&["id"]);
        let err = check_required_columns(&table, &["amount", "id", "currency"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The table orders did not contain any of the required columns: amount, currency."
        );
        assert_eq!(err.missing_columns(), vec!["amount", "currency"]);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let table = table_with(&["Amount"]);
        assert!(check_required_columns(&table, &["amount"]).is_err());
        assert!(check_required_columns(&table, &["Amount"]).is_ok());
    }
}
