#[cfg(test)]
mod tracker_tests {
    use crate::tracker::structs::torrent_entry::TorrentEntry;

    #[test]
    fn test_free_percentage_clamped() {
        let mut torrent = TorrentEntry::new(1);
        torrent.free = 250;
        assert_eq!(torrent.free_percentage(), 100);
        torrent.free = -20;
        assert_eq!(torrent.free_percentage(), 0);
        torrent.free = 25;
        assert_eq!(torrent.free_percentage(), 25);
    }

    #[test]
    fn test_torrent_entry_ignores_unknown_fields() {
        let torrent: TorrentEntry = serde_json::from_str(
            r#"{"id":7,"seeders":1,"leechers":2,"times_completed":3,"free":50,"doubleup":true,"peers":[]}"#
        ).unwrap();
        assert_eq!(torrent.id, 7);
        assert!(torrent.doubleup);
    }
}
