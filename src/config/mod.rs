//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the ledger configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **announce**: Crediting policy toggles, lease timing, worker and queue names
//! - **cache**: Optional Redis/Memcache backend for freeleech flags
//! - **lease**: Backend for the per-(user, torrent) serialization lease
//! - **queue**: Backend for inbound jobs and outbound batch records
//! - **database**: Aggregate storage connection
//! - **database_structure**: Table and column names of the aggregate storage
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_ledger::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (backend engines, errors).
pub mod enums;

/// Implementation blocks for configuration types.
pub mod impls;

/// Configuration section structures.
pub mod structs;
