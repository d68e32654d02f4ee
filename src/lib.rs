//! pseudoql - keyword-driven natural language to SQL over a demo database
//!
//! Free text is matched against a short ordered list of keywords, turned
//! into one of three fixed statements and run against an in-memory SQLite
//! database seeded with two tables.

pub mod auth;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod service;
pub mod store;
pub mod translate;
pub mod validate;
