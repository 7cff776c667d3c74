/// Announce fields as received from the protocol layer.
pub mod raw_announce;

/// Decoded and validated announce request.
pub mod announce_request;
