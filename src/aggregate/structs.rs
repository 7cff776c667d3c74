/// Applies credited and swarm deltas to the repositories.
pub mod aggregate_updater;

/// Which aggregates an announce touched.
pub mod aggregate_outcome;
