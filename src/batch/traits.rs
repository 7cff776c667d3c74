/// Append-only push onto a named queue.
pub mod batch_queue;
