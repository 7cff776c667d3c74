/// Announce event types from the BitTorrent protocol.
///
/// - `None` - Regular update (event absent)
/// - `Started` - New download started
/// - `Stopped` - Download stopped
/// - `Completed` - Download completed
pub mod announce_event;

/// Errors an announce can fail with.
pub mod announce_error;
