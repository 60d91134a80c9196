#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Tally - a small persistent number store
//!
//! Tally keeps a single table of integers in a SQLite database and exposes
//! two write operations over it: appending a value and shifting every stored
//! value by a delta. It can be used as both a command-line application and a
//! library.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | (none)  | Database operations only | `rusqlite` |
//! | `cli`   | Full CLI binary | `clap`, `serde_json`, `tracing-subscriber` |
//!
//! ```toml
//! # Minimal - just the database operations
//! tally = { version = "0.1", default-features = false }
//!
//! # Default (CLI binary)
//! tally = "0.1"
//! ```
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - **[`database`]**: All database functionality (always available)
//!   - `connection`: SQLite connection management
//!   - `numbers`: operations on the `numbers` table
//!
//! - **[`config`]**: Configuration management
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tally::{increment, insert, DbConfig};
//!
//! let config = DbConfig::new("/tmp/tally.sqlite3");
//!
//! // Append a value; fractional input is rounded by the engine
//! insert(&config, 42.6)?; // stores 43
//!
//! // Shift every stored value
//! increment(&config, 1.0)?;
//! ```
//!
//! Each operation opens its own connection and runs inside its own
//! transaction, so calls are independent and safe to issue from anywhere.

pub mod config;
pub mod database;

// =============================================================================
// Configuration (always available)
// =============================================================================

pub use config::TallyConfig;

// =============================================================================
// Database Module - Re-export commonly used types (always available)
// =============================================================================

pub use database::DatabaseConn;

// Operations on the numbers table
pub use database::{count, fetch_all, fetch_all_sorted, increment, insert, DbConfig};
