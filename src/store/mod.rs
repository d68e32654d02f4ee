//! # Seed Store
//!
//! The in-memory demo database: two fixed tables (`sales`, `customers`)
//! created and seeded once when the store is opened, read-only afterwards.

pub mod backend;
pub mod errors;
pub mod seed;
pub mod sqlite;

pub use backend::{Record, Store};
pub use errors::{StoreError, StoreResult};
pub use sqlite::SeedStore;
