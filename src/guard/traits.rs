/// Acquire and release of TTL bound leases.
pub mod lease_backend;
