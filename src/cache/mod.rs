//! Freeleech flag cache supporting Redis, Memcache and in-process storage.
//!
//! Whether a user holds a personal freeleech, or a freeleech token for a
//! torrent, is looked up once and then remembered without expiry.
//!
//! # Supported Backends
//!
//! - **Redis**: Recommended for production, shared between ledger instances
//! - **Memcache**: Alternative option, simpler deployment
//! - **Memory**: Per-process map, used when the cache is disabled
//!
//! # Invalidation
//!
//! Entries never expire. Whoever creates or deletes a personal freeleech or a
//! freeleech token must call `FlagCache::invalidate` with the matching key
//! from [`flags`].
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_ledger::cache::flags::{personal_freeleech_key, remember_flag};
//!
//! let key = personal_freeleech_key(42);
//! let exists = remember_flag(cache.as_ref(), &key, freeleech.personal_freeleech_exists(42)).await?;
//! ```

/// Cache engine enumeration (redis, memcache).
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Flag keys and the get-or-compute helper.
pub mod flags;

/// Implementation blocks for cache connectors.
pub mod impls;

/// Data structures for cache connections.
pub mod structs;

/// Flag cache trait definitions.
pub mod traits;
