/// Runs the announce pipeline.
pub mod announce_processor;

/// Everything one processed announce produced.
pub mod announce_outcome;
