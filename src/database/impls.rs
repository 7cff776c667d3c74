/// Driver dispatch for `DatabaseConnector`.
pub mod database_connector;

/// Queries for SQLite.
pub mod database_connector_sqlite;

/// Queries for MySQL.
pub mod database_connector_mysql;

/// Queries for PostgreSQL.
pub mod database_connector_pgsql;

/// Repository traits for `MemoryDatabase`.
pub mod memory_database;

/// Display for `DatabaseDrivers`.
pub mod database_drivers;
