/// Relative updates of user aggregates.
pub mod user_repository;

/// Relative updates of torrent aggregates.
pub mod torrent_repository;

/// Existence checks of freeleech grants.
pub mod freeleech_repository;

/// Lookup and storage of the previous state of a peer.
pub mod peer_repository;
