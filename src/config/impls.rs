/// Loading, saving, defaults and validation of `Configuration`.
pub mod configuration;

/// Display and Error implementations for `ConfigurationError`.
pub mod configuration_error;

/// Display implementation and URL helpers for `BackendEngine`.
pub mod backend_engine;
