use std::fmt;
use crate::config::enums::backend_engine::BackendEngine;

impl fmt::Display for BackendEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendEngine::memory => write!(f, "memory"),
            BackendEngine::redis => write!(f, "redis"),
        }
    }
}

impl BackendEngine {
    pub fn url(&self, address: &str) -> String {
        match self {
            BackendEngine::memory => String::new(),
            BackendEngine::redis => format!("redis://{}", address),
        }
    }
}
