use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwarmDeltas {
    pub seeders: i64,
    pub leechers: i64,
    pub times_completed: u64,
}
