//! Per (user, torrent) serialization of announce processing.
//!
//! Two announces for the same user on the same torrent must not interleave:
//! both would read the same previous peer and double count deltas. A
//! [`structs::serialization_guard::SerializationGuard`] takes a lease keyed by
//! the pair before processing and gives it back on every return path. The
//! lease expires after its TTL so a crashed holder cannot block the pair
//! forever.
//!
//! A busy lease is reported as `AnnounceError::Contention`; the worker puts
//! such jobs back on the queue.

/// Error types for lease operations.
pub mod errors;

/// Implementation blocks for lease backends and the guard.
pub mod impls;

/// Lease backends and the guard itself.
pub mod structs;

/// Lease backend trait.
pub mod traits;
