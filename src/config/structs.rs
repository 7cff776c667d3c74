/// Root configuration structure.
pub mod configuration;

/// Crediting policy, lease timing and worker settings.
pub mod announce_config;

/// Freeleech flag cache backend settings.
pub mod cache_config;

/// Serialization lease backend settings.
pub mod lease_config;

/// Job and batch queue backend settings.
pub mod queue_config;

/// Aggregate storage connection settings.
pub mod database_config;

/// Table and column names of the aggregate storage.
pub mod database_structure_config;

/// Users table structure.
pub mod database_structure_config_users;

/// Torrents table structure.
pub mod database_structure_config_torrents;

/// Peers table structure.
pub mod database_structure_config_peers;

/// Personal freeleech table structure.
pub mod database_structure_config_personal_freeleech;

/// Freeleech tokens table structure.
pub mod database_structure_config_freeleech_tokens;

/// Sentry error reporting settings.
pub mod sentry_config;
