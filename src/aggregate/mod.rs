//! Relative updates of user and torrent aggregates.
//!
//! Users are credited unless the announce is `stopped` or both credited
//! deltas are zero. Torrents are touched only when a swarm delta is nonzero.
//! Both go through the repositories as increments, never absolute writes.

/// Implementation blocks for the updater.
pub mod impls;

/// The updater and its outcome.
pub mod structs;

/// Unit tests for the updater.
pub mod tests;
