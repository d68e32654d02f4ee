//! # Seed Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Seed store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The SQLite driver rejected or failed a statement
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A previous holder of the connection panicked
    #[error("Connection lock poisoned")]
    LockPoisoned,

    /// A column held text that is not valid UTF-8
    #[error("Column '{column}' is not valid UTF-8")]
    InvalidText { column: String },
}
