/// Backend selection for leases and queues (memory, redis).
pub mod backend_engine;

/// Errors raised while loading or validating configuration.
pub mod configuration_error;
