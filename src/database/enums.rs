//! Database enumeration types.

/// Supported database driver types (sqlite3, mysql, pgsql).
pub mod database_drivers;
