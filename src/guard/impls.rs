pub mod lease_token;

pub mod memory_lease;

pub mod redis_lease;

pub mod serialization_guard;
