//! # Statement Validator
//!
//! Checks that the table a generated statement reads from exists in the
//! store's catalog. Only the first `FROM <word>` is examined.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::store::{Store, StoreResult};

/// Detail reported when the referenced table is missing
pub const TABLE_NOT_FOUND: &str = "Table not found in schema.";

static FROM_TABLE: OnceLock<Regex> = OnceLock::new();

fn from_table() -> &'static Regex {
    FROM_TABLE.get_or_init(|| Regex::new(r"(?i)FROM\s+(\w+)").expect("static regex is valid"))
}

/// Outcome of validating one statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error_detail: None,
        }
    }

    pub fn invalid(detail: impl Into<String>) -> Self {
        Self {
            valid: false,
            error_detail: Some(detail.into()),
        }
    }
}

/// Table name following `FROM`, or an empty string when there is none
pub fn extract_table(statement: &str) -> &str {
    from_table()
        .captures(statement)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Validator bound to a catalog
pub struct Validator<'a> {
    catalog: &'a dyn Store,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a dyn Store) -> Self {
        Self { catalog }
    }

    /// Validate a statement against the catalog.
    ///
    /// A statement with no `FROM` clause extracts an empty name, which the
    /// catalog never contains, so it is reported like any unknown table.
    /// Only catalog access failures are errors.
    pub fn validate(&self, statement: &str) -> StoreResult<ValidationResult> {
        let table = extract_table(statement);
        if self.catalog.has_table(table)? {
            Ok(ValidationResult::valid())
        } else {
            Ok(ValidationResult::invalid(TABLE_NOT_FOUND))
        }
    }
}
