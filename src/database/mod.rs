//! Database module
//!
//! This module provides all database functionality for tally:
//!
//! - **connection**: the SQLite `DatabaseConn` wrapper
//! - **numbers**: the numbers-table operations (insert, increment, reads)
//!
//! There is no shared state between operations: each call opens its own
//! connection, runs one statement, and closes the connection again. The
//! `numbers` table itself is provisioned out of band by `sql/setup.sql`.

pub mod connection;
pub mod numbers;

pub use connection::DatabaseConn;
pub use numbers::{count, fetch_all, fetch_all_sorted, increment, insert, DbConfig};
