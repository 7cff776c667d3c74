use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreditPolicy {
    pub global_freeleech: bool,
    pub global_double_upload: bool,
}
