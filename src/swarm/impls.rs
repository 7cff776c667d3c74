pub mod swarm_transition;

pub mod swarm_deltas;
