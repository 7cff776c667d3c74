//! Already-loaded tracker entities an announce is accounted against.
//!
//! Users, their groups and torrents are loaded by an external collaborator
//! before the announce reaches the ledger. Only their identity, promotions
//! and group flags are used; previous peer state is read separately, under
//! the announce lease.

/// Implementation blocks for tracker entities.
pub mod impls;

/// Entity structures: users, groups and torrents.
pub mod structs;

/// Unit tests for tracker entities.
pub mod tests;
