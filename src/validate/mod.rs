//! # Validation
//!
//! Table-existence check for generated statements.

pub mod validator;

pub use validator::{extract_table, ValidationResult, Validator, TABLE_NOT_FOUND};
