use serde::{Deserialize, Serialize};
use crate::announce::structs::raw_announce::RawAnnounce;
use crate::tracker::structs::group_entry::GroupEntry;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::user_entry::UserEntry;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnnounceJob {
    pub announce: RawAnnounce,
    pub user: UserEntry,
    #[serde(default)]
    pub group: GroupEntry,
    pub torrent: TorrentEntry,
    /// Failed attempts so far.
    #[serde(default)]
    pub attempts: u32,
}
