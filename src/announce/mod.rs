//! Announce request normalization.
//!
//! Turns the raw fields handed over by the protocol layer into a validated
//! `AnnounceRequest`. The peer id and ip-address arrive base64-encoded, the
//! counters as decimal strings. Anything that fails to decode is rejected
//! with `AnnounceError::MalformedInput` before any state is touched.

/// Announce events and the announce error type.
pub mod enums;

/// Implementation blocks for announce types.
pub mod impls;

/// Raw and normalized announce request structures.
pub mod structs;

/// Unit tests for announce normalization.
pub mod tests;
