/// Promotion helpers for `TorrentEntry`.
pub mod torrent_entry;
