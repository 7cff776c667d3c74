use std::fmt::Debug;
use sentry::{
    Transaction,
    TransactionContext
};

/// Only starts a transaction when trace logging is enabled.
pub fn start_trace_transaction(name: &str, operation: &str) -> Option<Transaction> {
    if log::max_level() >= log::LevelFilter::Trace {
        let ctx = TransactionContext::new(name, operation);
        Some(sentry::start_transaction(ctx))
    } else {
        None
    }
}

/// Tags the transaction with the outcome and any extra tags, then finishes it.
pub fn finish_trace_transaction<T, E: Debug>(transaction: Option<Transaction>, result: &Result<T, E>, tags: &[(&str, String)]) {
    if let Some(txn) = transaction {
        match result {
            Ok(_) => txn.set_tag("result", "success"),
            Err(e) => txn.set_tag("result", format!("error: {:?}", e)),
        }
        for (key, value) in tags {
            txn.set_tag(key, value.clone());
        }
        txn.finish();
    }
}
