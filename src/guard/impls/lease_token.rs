use std::fmt;
use uuid::Uuid;
use crate::guard::structs::lease_token::LeaseToken;

impl LeaseToken {
    pub fn generate() -> LeaseToken {
        LeaseToken(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeaseToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
