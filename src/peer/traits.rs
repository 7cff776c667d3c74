/// Idempotent reachability check of a peer.
pub mod connectable_check;
