use crate::tracker::structs::torrent_entry::TorrentEntry;

impl TorrentEntry {
    pub fn new(id: u64) -> TorrentEntry {
        TorrentEntry {
            id,
            ..Default::default()
        }
    }

    /// Freeleech percentage clamped to `[0, 100]`.
    pub fn free_percentage(&self) -> u64 {
        self.free.clamp(0, 100) as u64
    }
}
