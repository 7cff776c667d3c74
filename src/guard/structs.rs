/// Opaque proof of lease ownership.
pub mod lease_token;

/// In-process lease table.
pub mod memory_lease;

/// Redis backed leases shared between instances.
pub mod redis_lease;

/// Runs work while holding the lease of a (user, torrent) pair.
pub mod serialization_guard;
