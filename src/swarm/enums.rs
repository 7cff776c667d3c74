/// Outcome of comparing the previous and the announced peer state.
pub mod swarm_transition;
