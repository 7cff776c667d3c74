//! Peer state resolution.
//!
//! Finds the previous record of the announcing peer inside the torrent's
//! loaded peer set and derives the raw traffic deltas since that record.
//!
//! # Rules
//!
//! - A peer is identified by `(peer_id, user_id, torrent_id)`.
//! - Deltas are `max(reported - previous, 0)`. Client counter resets never
//!   produce negative traffic.
//! - A first sighting with nonzero counters is a client resuming a session the
//!   tracker never recorded: the effective event becomes `started` and both
//!   deltas are zero. Crediting resumes from this announce onwards.
//! - A stored row that is no longer active (its last event was `stopped`)
//!   supplies previous counters, but the peer rejoins the swarm.

/// Implementation blocks for peer types.
pub mod impls;

/// Peer records, identifiers and resolved state.
pub mod structs;

/// Reachability check capability.
pub mod traits;
