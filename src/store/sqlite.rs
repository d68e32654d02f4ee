//! # SQLite Seed Store
//!
//! In-memory SQLite database seeded at open. The connection is never written
//! to after seeding; the mutex only serializes driver access.

use std::sync::{Mutex, MutexGuard};

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{Number, Value};
use tracing::debug;

use super::backend::{Record, Store};
use super::errors::{StoreError, StoreResult};
use super::seed;

/// Seeded in-memory database
#[derive(Debug)]
pub struct SeedStore {
    conn: Mutex<Connection>,
}

impl SeedStore {
    /// Open a fresh in-memory database and install the seed tables
    pub fn open_in_memory() -> StoreResult<Self> {
        let mut conn = Connection::open_in_memory()?;
        seed::install(&mut conn)?;

        debug!(tables = ?seed::SEED_TABLES, "Seeded in-memory database");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Store for SeedStore {
    fn fetch_all(&self, sql: &str) -> StoreResult<Vec<Record>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            let mut record = Record::with_capacity(columns.len());
            for (idx, column) in columns.iter().enumerate() {
                let value = to_json(column, row.get_ref(idx)?)?;
                record.insert(column.clone(), value);
            }
            records.push(record);
        }

        debug!(sql, rows = records.len(), "Statement executed");
        Ok(records)
    }

    fn has_table(&self, name: &str) -> StoreResult<bool> {
        let conn = self.conn()?;
        let found = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![name],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn table_names(&self) -> StoreResult<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }
}

/// Convert one SQLite cell to JSON
fn to_json(column: &str, value: ValueRef<'_>) -> StoreResult<Value> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::from(v),
        ValueRef::Real(v) => Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null),
        ValueRef::Text(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(|_| StoreError::InvalidText {
                column: column.to_string(),
            })?;
            Value::String(text.to_string())
        }
        ValueRef::Blob(bytes) => Value::from(bytes.to_vec()),
    })
}
