//! Data access for the numbers table
//!
//! The operations here are deliberately stateless: every call opens its own
//! connection from the caller's [`DbConfig`], runs a single parameterized
//! statement inside a transaction, and closes the connection on the way out.
//! Commit happens only on the success path; any error propagates after the
//! transaction has rolled back and the connection has closed.
//!
//! Fractional inputs are coerced to integers by the database itself. SQLite
//! column affinity would happily store `42.6` as a REAL in an INTEGER column
//! and a bare `CAST` truncates, so the statements round explicitly:
//! `ROUND` in SQLite rounds half away from zero, which is what the numeric
//! to integer assignment cast of server engines does as well (`42.6` is
//! stored as `43`, never `42`).

use anyhow::{anyhow, Result};
use rusqlite::params;
use tracing::info;

use crate::database::connection::DatabaseConn;

/// Connection parameters for the numbers database.
///
/// rusqlite connects by file path, so the path is the whole mapping. Tests
/// construct this directly; the CLI derives it from [`crate::TallyConfig`]
/// or takes it from the `--db` override.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file
    pub path: String,
}

impl DbConfig {
    /// Create connection parameters for the given database file
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

const INSERT_SQL: &str = "INSERT INTO numbers VALUES (CAST(ROUND(?1) AS INTEGER))";

const INCREMENT_SQL: &str = "UPDATE numbers SET num = CAST(ROUND(num + ?1) AS INTEGER)";

/// Insert a number into the numbers table.
///
/// The value is rounded to the nearest integer by the database, so
/// `insert(&config, 42.6)` stores `43`. Duplicates are permitted; the table
/// declares no uniqueness constraint.
pub fn insert(config: &DbConfig, n: f64) -> Result<()> {
    let db = DatabaseConn::open_path(&config.path)?;
    let tx = db.transaction()?;
    tx.execute(INSERT_SQL, params![n])
        .map_err(|e| anyhow!("Failed to insert number: {}", e))?;
    tx.commit()
        .map_err(|e| anyhow!("Failed to commit insert: {}", e))?;
    info!("inserted {} into numbers", n);
    Ok(())
}

/// Add a delta to every stored number.
///
/// Affects all rows in one statement; an empty table is a no-op, not an
/// error. Row count is unchanged either way.
pub fn increment(config: &DbConfig, delta: f64) -> Result<()> {
    let db = DatabaseConn::open_path(&config.path)?;
    let tx = db.transaction()?;
    let updated = tx
        .execute(INCREMENT_SQL, params![delta])
        .map_err(|e| anyhow!("Failed to increment numbers: {}", e))?;
    tx.commit()
        .map_err(|e| anyhow!("Failed to commit increment: {}", e))?;
    info!("incremented {} rows by {}", updated, delta);
    Ok(())
}

/// Read every stored value in insertion (rowid) order.
pub fn fetch_all(config: &DbConfig) -> Result<Vec<i64>> {
    fetch_with(config, "SELECT num FROM numbers ORDER BY rowid")
}

/// Read every stored value ordered ascending.
pub fn fetch_all_sorted(config: &DbConfig) -> Result<Vec<i64>> {
    fetch_with(config, "SELECT num FROM numbers ORDER BY num")
}

/// Count the stored rows.
pub fn count(config: &DbConfig) -> Result<u64> {
    let db = DatabaseConn::open_path(&config.path)?;
    db.table_count("numbers")
}

fn fetch_with(config: &DbConfig, sql: &str) -> Result<Vec<i64>> {
    let db = DatabaseConn::open_path(&config.path)?;
    let mut stmt = db
        .conn
        .prepare(sql)
        .map_err(|e| anyhow!("Failed to prepare query: {}", e))?;
    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(|e| anyhow!("Failed to read numbers: {}", e))?;
    rows.collect::<Result<Vec<i64>, _>>()
        .map_err(|e| anyhow!("Failed to read numbers: {}", e))
}
