/// Event name parsing and display.
pub mod announce_event;

/// Retry classification for `AnnounceError`.
pub mod announce_error;

/// Normalization of a `RawAnnounce`.
pub mod announce_request;
