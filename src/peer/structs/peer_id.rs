use serde::{Deserialize, Serialize};

/// Opaque peer identifier.
///
/// Clients normally send 20 bytes, but no length is enforced; the value is
/// compared byte for byte. Serialized as a base64 string.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug, Default)]
pub struct PeerId(#[serde(with = "crate::common::serde_base64")] pub Vec<u8>);
