//! Aggregate storage behind narrow repository interfaces.
//!
//! The announce pipeline never talks to a storage engine directly. It reads
//! freeleech existence and applies relative increments through the traits in
//! [`traits`]:
//!
//! - `UserRepository::increment_aggregates` - credited upload/download
//! - `TorrentRepository::increment_aggregates` - seeders, leechers, completions
//! - `FreeleechRepository` - personal freeleech and freeleech token existence
//!
//! # Backends
//!
//! - `MemoryDatabase` keeps everything in process, for embedding and tests
//! - `DatabaseConnector` issues SQL through `sqlx` against SQLite, MySQL or
//!   PostgreSQL, with table and column names taken from the configuration
//!
//! Increments are always expressed as `column = column + delta` so concurrent
//! announces on the same row compose without lost updates.

/// Database driver enumeration (sqlite3, mysql, pgsql).
pub mod enums;

/// Error types for repository operations.
pub mod errors;

/// SQL builders shared by the drivers.
pub mod helpers;

/// Implementation blocks for database connectors.
pub mod impls;

/// Data structures for database connections.
pub mod structs;

/// Repository trait definitions.
pub mod traits;

/// Unit tests for the database layer.
pub mod tests;
