use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AggregateOutcome {
    pub user_updated: bool,
    pub torrent_updated: bool,
}
