use std::fmt;
use crate::swarm::enums::swarm_transition::SwarmTransition;

impl SwarmTransition {
    /// `joins_swarm` is true for unknown peers and for peers whose stored row is inactive.
    pub fn classify(joins_swarm: bool, is_dead: bool, is_seeder: bool, previous_left: u64) -> SwarmTransition {
        match (joins_swarm, is_dead, is_seeder) {
            (true, false, true) => SwarmTransition::NewSeed,
            (true, false, false) => SwarmTransition::NewLeech,
            (true, true, _) => SwarmTransition::Unchanged,
            (false, true, true) => SwarmTransition::StoppedSeed,
            (false, true, false) => SwarmTransition::StoppedLeech,
            (false, false, true) if previous_left > 0 => SwarmTransition::LeechBecomesSeed,
            (false, false, false) if previous_left == 0 => SwarmTransition::SeedBecomesLeech,
            (false, false, _) => SwarmTransition::Unchanged,
        }
    }

    pub fn adds_seeder(&self) -> bool {
        matches!(self, SwarmTransition::NewSeed | SwarmTransition::LeechBecomesSeed)
    }

    pub fn removes_seeder(&self) -> bool {
        matches!(self, SwarmTransition::StoppedSeed | SwarmTransition::SeedBecomesLeech)
    }

    pub fn adds_leecher(&self) -> bool {
        matches!(self, SwarmTransition::NewLeech | SwarmTransition::SeedBecomesLeech)
    }

    pub fn removes_leecher(&self) -> bool {
        matches!(self, SwarmTransition::StoppedLeech | SwarmTransition::LeechBecomesSeed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SwarmTransition::NewSeed => "new_seed",
            SwarmTransition::NewLeech => "new_leech",
            SwarmTransition::StoppedSeed => "stopped_seed",
            SwarmTransition::StoppedLeech => "stopped_leech",
            SwarmTransition::LeechBecomesSeed => "leech_becomes_seed",
            SwarmTransition::SeedBecomesLeech => "seed_becomes_leech",
            SwarmTransition::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for SwarmTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
