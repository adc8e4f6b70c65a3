//! Validation functionality
//!
//! Provides validation logic for:
//! - Column presence checking (required columns against a table model)
//! - Input validation for paths, filenames, and email addresses

pub mod input;
pub mod tables;

pub use input::{
    INVALID_FILE_NAME_CHARS, INVALID_PATH_CHARS, is_valid_email_address, is_valid_file_name,
    is_valid_path,
};
pub use tables::{MissingColumnsError, check_required_columns};
