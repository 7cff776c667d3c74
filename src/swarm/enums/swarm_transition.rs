use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SwarmTransition {
    NewSeed,
    NewLeech,
    StoppedSeed,
    StoppedLeech,
    LeechBecomesSeed,
    SeedBecomesLeech,
    Unchanged,
}
