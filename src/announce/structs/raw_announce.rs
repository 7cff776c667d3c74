use serde::{Deserialize, Serialize};

/// Announce fields exactly as the protocol layer hands them over.
///
/// `peer_id` and `ip` are base64-encoded byte strings. Counters and port are
/// the decimal strings found in the query string; a missing counter is `None`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawAnnounce {
    #[serde(default)]
    pub event: Option<String>,
    pub peer_id: String,
    pub ip: String,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub uploaded: Option<String>,
    #[serde(default)]
    pub downloaded: Option<String>,
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub agent: String,
}
