//! Database connection management
//!
//! This module provides the SQLite connection wrapper used by the numbers
//! operations, the CLI, and the tests.

use anyhow::{anyhow, Result};
use rusqlite::Connection;

/// Thin wrapper around a SQLite connection.
///
/// A `DatabaseConn` is a short-lived resource: callers open one, run their
/// statements, and let it drop. Dropping the wrapper closes the underlying
/// connection, so a connection never outlives the scope that opened it.
pub struct DatabaseConn {
    pub conn: Connection,
}

impl DatabaseConn {
    /// Open a database at the specified path.
    ///
    /// If the path is `None`, an in-memory database is created. In-memory
    /// databases are only useful for single-connection scenarios such as
    /// unit tests; the numbers operations open a fresh connection per call
    /// and therefore need a file-backed database.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let conn = match path {
            Some(p) => Connection::open(p)
                .map_err(|e| anyhow!("Failed to open database at '{}': {}", p, e))?,
            None => Connection::open_in_memory()
                .map_err(|e| anyhow!("Failed to create in-memory database: {}", e))?,
        };

        Ok(DatabaseConn { conn })
    }

    /// Open a database at the specified path (convenience method)
    pub fn open_path(path: &str) -> Result<Self> {
        Self::open(Some(path))
    }

    /// Create an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::open(None)
    }

    /// Execute a SQL statement without parameters
    pub fn execute(&self, sql: &str) -> Result<usize> {
        self.conn
            .execute(sql, [])
            .map_err(|e| anyhow!("Failed to execute SQL: {}", e))
    }

    /// Begin a transaction on this connection.
    ///
    /// The returned transaction rolls back when dropped; callers commit
    /// explicitly on their success path.
    pub fn transaction(&self) -> Result<rusqlite::Transaction<'_>> {
        self.conn
            .unchecked_transaction()
            .map_err(|e| anyhow!("Failed to begin transaction: {}", e))
    }

    /// Check if a table exists in the database
    pub fn table_exists(&self, table_name: &str) -> Result<bool> {
        let count: i32 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table_name],
                |row| row.get(0),
            )
            .map_err(|e| anyhow!("Failed to check table existence: {}", e))?;
        Ok(count > 0)
    }

    /// Get the row count for a table
    pub fn table_count(&self, table_name: &str) -> Result<u64> {
        let query = format!("SELECT COUNT(*) FROM {}", table_name);
        let count: u64 = self
            .conn
            .query_row(&query, [], |row| row.get(0))
            .map_err(|e| anyhow!("Failed to get table count: {}", e))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = DatabaseConn::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn test_execute() {
        let db = DatabaseConn::open_in_memory().unwrap();
        let result = db.execute("CREATE TABLE test (id INTEGER PRIMARY KEY)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_table_exists() {
        let db = DatabaseConn::open_in_memory().unwrap();
        db.execute("CREATE TABLE numbers (num INTEGER)").unwrap();

        assert!(db.table_exists("numbers").unwrap());
        assert!(!db.table_exists("letters").unwrap());
    }

    #[test]
    fn test_table_count() {
        let db = DatabaseConn::open_in_memory().unwrap();
        db.execute("CREATE TABLE numbers (num INTEGER)").unwrap();
        db.execute("INSERT INTO numbers VALUES (1), (2), (3)")
            .unwrap();

        assert_eq!(db.table_count("numbers").unwrap(), 3);
    }

    #[test]
    fn test_transaction_rolls_back_on_drop() {
        let db = DatabaseConn::open_in_memory().unwrap();
        db.execute("CREATE TABLE numbers (num INTEGER)").unwrap();

        {
            let tx = db.transaction().unwrap();
            tx.execute("INSERT INTO numbers VALUES (1)", []).unwrap();
            // dropped without commit
        }

        assert_eq!(db.table_count("numbers").unwrap(), 0);
    }
}
