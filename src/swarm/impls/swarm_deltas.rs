use crate::announce::enums::announce_event::AnnounceEvent;
use crate::swarm::enums::swarm_transition::SwarmTransition;
use crate::swarm::sign;
use crate::swarm::structs::swarm_deltas::SwarmDeltas;

impl SwarmDeltas {
    /// Completion is counted on every `completed` event, whatever the transition.
    pub fn from_transition(transition: SwarmTransition, event: AnnounceEvent) -> SwarmDeltas {
        SwarmDeltas {
            seeders: sign(transition.adds_seeder(), transition.removes_seeder()),
            leechers: sign(transition.adds_leecher(), transition.removes_leecher()),
            times_completed: u64::from(event == AnnounceEvent::Completed),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.seeders == 0 && self.leechers == 0 && self.times_completed == 0
    }
}
