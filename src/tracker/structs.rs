//! Data structures for the entities an announce is accounted against.

/// User account aggregate.
///
/// Lifetime credited traffic, only ever changed through relative increments.
pub mod user_entry;

/// Permission group of a user.
///
/// Carries the group-wide freeleech, double upload and immunity flags.
pub mod group_entry;

/// Torrent swarm aggregate with its loaded peer set.
pub mod torrent_entry;
