//! One announce, end to end.
//!
//! [`structs::announce_processor::AnnounceProcessor::process`] takes the
//! (user, torrent) lease and then, on a single task:
//!
//! 1. normalizes the raw fields
//! 2. resolves the previous peer state and raw deltas
//! 3. checks connectability
//! 4. credits the deltas
//! 5. classifies the swarm transition
//! 6. increments user and torrent aggregates
//! 7. queues the peer and history records
//!
//! A malformed announce is rejected before anything is touched. A failed
//! emission does not undo the increments; it is logged, reported to Sentry
//! and counted.

/// Implementation blocks for the processor.
pub mod impls;

/// The processor and its result.
pub mod structs;
