//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the announce ledger.
//!
//! # Utilities
//!
//! - Logging setup
//! - Timestamp helpers
//! - User-agent truncation
//! - Base64 transport of opaque byte strings
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type used during startup

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Serde adapter encoding byte vectors as standard base64 strings.
pub mod serde_base64;

/// Unit tests for common utilities.
pub mod tests;
