/// Site wide promotion toggles.
pub mod credit_policy;

/// Per user and per (user, torrent) freeleech grants.
pub mod credit_overrides;

/// Credited traffic of one announce.
pub mod credited_deltas;

/// Applies the policy and resolves the overrides.
pub mod credit_engine;
