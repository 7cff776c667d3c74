//! Seeder, leecher and completion bookkeeping.
//!
//! An announce is classified into at most one of six transitions:
//!
//! | Transition | Condition |
//! |---|---|
//! | `NewSeed` | joining, not stopping, seeder |
//! | `NewLeech` | joining, not stopping, leecher |
//! | `StoppedSeed` | in swarm, stopping, seeder |
//! | `StoppedLeech` | in swarm, stopping, leecher |
//! | `LeechBecomesSeed` | in swarm, not stopping, seeder, previously left > 0 |
//! | `SeedBecomesLeech` | in swarm, not stopping, leecher, previously left == 0 |
//!
//! Anything else is `Unchanged`. Counter deltas are derived with [`sign`] so
//! each lies in `{-1, 0, 1}`.

/// Transition enumeration.
pub mod enums;

/// Implementation blocks for classification.
pub mod impls;

/// Counter deltas.
pub mod structs;


/// Three way comparison of two indicators.
pub fn sign(positive: bool, negative: bool) -> i64 {
    (i64::from(positive) - i64::from(negative)).signum()
}
