use std::fmt;
use crate::peer::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl From<&[u8]> for PeerId {
    fn from(data: &[u8]) -> PeerId {
        PeerId(data.to_vec())
    }
}

impl PeerId {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
