//! # Store Trait

use serde_json::{Map, Value};

use super::errors::StoreResult;

/// One result row, keyed by column name in SELECT order
pub type Record = Map<String, Value>;

/// Read-only access to the demo database.
///
/// Everything the request flow needs from the database goes through this
/// trait, so handlers never see the driver directly.
pub trait Store: Send + Sync + std::fmt::Debug {
    /// Execute a statement and collect every row it returns
    fn fetch_all(&self, sql: &str) -> StoreResult<Vec<Record>>;

    /// Check the catalog for a table with exactly this name
    fn has_table(&self, name: &str) -> StoreResult<bool>;

    /// List every table in the catalog, sorted by name
    fn table_names(&self) -> StoreResult<Vec<String>>;
}
