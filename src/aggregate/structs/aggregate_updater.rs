use std::sync::Arc;
use crate::database::traits::torrent_repository::TorrentRepository;
use crate::database::traits::user_repository::UserRepository;

#[derive(Clone)]
pub struct AggregateUpdater {
    pub(crate) users: Arc<dyn UserRepository>,
    pub(crate) torrents: Arc<dyn TorrentRepository>,
}
