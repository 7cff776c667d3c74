/// Sentry performance transactions around startup and announce processing.
pub mod sentry_tracing;
