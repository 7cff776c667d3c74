/// Seeder, leecher and completion count changes.
pub mod swarm_deltas;
