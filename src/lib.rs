//! Data Validation SDK - Validation helpers for tabular models and raw strings
//!
//! Provides:
//! - Table/column model types for describing tabular data
//! - Column presence checking with caller-facing diagnostics
//! - Input validation predicates for paths, filenames, and email addresses

pub mod models;
pub mod validation;

// Re-export commonly used types
pub use models::{Column, Table};
pub use validation::input::{
    INVALID_FILE_NAME_CHARS, INVALID_PATH_CHARS, is_valid_email_address, is_valid_file_name,
    is_valid_path,
};
pub use validation::tables::{MissingColumnsError, check_required_columns};
