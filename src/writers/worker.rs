//! Shared consumption-task machinery
//!
//! Every queued writer is a bounded channel feeding one dedicated consumer
//! thread that exclusively owns the sink. Closing drops the sender; the
//! consumer keeps receiving until the channel reports empty-and-disconnected,
//! so every record accepted before the close is written before the join
//! returns.

use crate::core::record::Record;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::thread::{self, JoinHandle};

pub(crate) struct ConsumerTask {
    sender: Option<Sender<Record>>,
    handle: Option<JoinHandle<()>>,
}

impl ConsumerTask {
    /// Spawn the consumer thread. `capacity` 0 creates a rendezvous channel,
    /// making every hand-off synchronous. `run` receives the channel and is
    /// expected to drain it to completion, then flush and release the sink.
    pub(crate) fn spawn<F>(capacity: usize, run: F) -> Self
    where
        F: FnOnce(Receiver<Record>) + Send + 'static,
    {
        let (sender, receiver) = bounded(capacity);
        let handle = thread::spawn(move || run(receiver));
        Self {
            sender: Some(sender),
            handle: Some(handle),
        }
    }

    /// Enqueue a record, blocking while the queue is full. A no-op once the
    /// task has been closed.
    pub(crate) fn send(&self, record: Record) {
        if let Some(sender) = &self.sender {
            // Disconnection means the consumer is gone; best-effort, drop it.
            let _ = sender.send(record);
        }
    }

    /// Signal end-of-input and block until the consumer has drained the
    /// queue and exited. Idempotent.
    pub(crate) fn close(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ConsumerTask {
    fn drop(&mut self) {
        self.close();
    }
}
