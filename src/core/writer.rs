//! Writer trait and queue sizing
//!
//! Every backend moves through the same lifecycle: construction spawns its
//! consumption task (Running); `close` signals end-of-input (Closing), and
//! once the task has drained every previously accepted record and released
//! its sink the writer is Closed. There are no timeouts anywhere in this
//! path: a stuck sink blocks the closer indefinitely, which is an accepted
//! limitation of the best-effort delivery model.

use super::record::Record;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Process-wide default capacity for writer input queues.
static LOG_BUFFER_LENGTH: AtomicUsize = AtomicUsize::new(32);

/// Current default queue capacity for newly constructed writers.
pub fn default_buffer_length() -> usize {
    LOG_BUFFER_LENGTH.load(Ordering::Relaxed)
}

/// Override the default queue capacity. A length of 0 makes hand-off to the
/// consumption task synchronous. Applies only to writers constructed after
/// the call; builders can still override per writer.
pub fn set_default_buffer_length(len: usize) {
    LOG_BUFFER_LENGTH.store(len, Ordering::Relaxed);
}

/// An output backend: accepts records, renders them, and emits them to one
/// sink from a dedicated consumption task.
pub trait LogWriter: Send + Sync {
    /// Hand a record to the writer. Blocks the caller while the writer's
    /// queue is full (back-pressure); with a queue capacity of zero the
    /// hand-off is synchronous and blocks until the consumption task accepts
    /// the record. After `close` this is a silent no-op.
    fn log_write(&self, record: Record);

    /// Signal end-of-input and block until every previously accepted record
    /// has been written to the sink. Idempotent.
    fn close(&mut self);
}
