/// Boolean key-value capability.
pub mod flag_cache;
