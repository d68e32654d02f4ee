//! # Seed Data
//!
//! Schema and rows installed once when the store is opened.

use rusqlite::{params, Connection};

use super::errors::StoreResult;

/// Tables created at startup
pub const SEED_TABLES: [&str; 2] = ["sales", "customers"];

/// (date, amount, region)
pub const SEED_SALES: [(&str, i64, &str); 2] = [
    ("2024-03-27", 500, "North"),
    ("2024-03-28", 700, "South"),
];

/// (name, email)
pub const SEED_CUSTOMERS: [(&str, &str); 2] = [
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
];

const CREATE_SALES: &str = r#"
    CREATE TABLE sales (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT,
        amount INTEGER,
        region TEXT
    )
"#;

const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT
    )
"#;

/// Create both tables and insert the seed rows in one transaction
pub fn install(conn: &mut Connection) -> StoreResult<()> {
    let tx = conn.transaction()?;

    tx.execute(CREATE_SALES, [])?;
    tx.execute(CREATE_CUSTOMERS, [])?;

    for (date, amount, region) in SEED_SALES {
        tx.execute(
            "INSERT INTO sales (date, amount, region) VALUES (?1, ?2, ?3)",
            params![date, amount, region],
        )?;
    }

    for (name, email) in SEED_CUSTOMERS {
        tx.execute(
            "INSERT INTO customers (name, email) VALUES (?1, ?2)",
            params![name, email],
        )?;
    }

    tx.commit()?;
    Ok(())
}
