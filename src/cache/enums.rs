/// Cache engine selection.
pub mod cache_engine;
