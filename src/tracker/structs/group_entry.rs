use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupEntry {
    pub is_freeleech: bool,
    pub is_double_upload: bool,
    pub is_immune: bool,
}
