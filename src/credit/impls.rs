pub mod credit_policy;

pub mod credited_deltas;

pub mod credit_engine;
