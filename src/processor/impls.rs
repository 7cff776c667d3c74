pub mod announce_processor;
