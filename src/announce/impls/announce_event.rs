use std::fmt;
use crate::announce::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Maps an event name to an event; unknown or empty names are treated as absent.
    pub fn from_name(name: Option<&str>) -> AnnounceEvent {
        match name.map(|n| n.trim().to_lowercase()).as_deref() {
            Some("started") => AnnounceEvent::Started,
            Some("stopped") => AnnounceEvent::Stopped,
            Some("completed") => AnnounceEvent::Completed,
            _ => AnnounceEvent::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnounceEvent::None => "",
            AnnounceEvent::Completed => "completed",
            AnnounceEvent::Started => "started",
            AnnounceEvent::Stopped => "stopped",
        }
    }
}

impl fmt::Display for AnnounceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnounceEvent::None => write!(f, "none"),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}
