//! Console writer implementation
//!
//! Two interchangeable designs behind one type. The queued mode is the
//! actor style: a consumption task exclusively owns the output stream, so no
//! locking is needed. The synchronous mode writes on the caller's thread
//! under a mutex, for callers that need immediate ordering without a queue.
//! In both modes a record is emitted with a single write, so concurrent
//! producers interleave at record granularity, never mid-record.

use super::worker::ConsumerTask;
use crate::core::{
    format::{RecordFormat, FORMAT_DEFAULT},
    record::Record,
    writer::{default_buffer_length, LogWriter},
};
use parking_lot::Mutex;
use std::io::Write;

enum Mode {
    Queued(ConsumerTask),
    Direct {
        sink: Mutex<Box<dyn Write + Send>>,
        format: RecordFormat,
    },
}

pub struct ConsoleWriter {
    mode: Mode,
}

impl ConsoleWriter {
    /// Queued writer to standard output with the default long format.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> ConsoleWriterBuilder {
        ConsoleWriterBuilder::new()
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for ConsoleWriter {
    fn log_write(&self, record: Record) {
        match &self.mode {
            Mode::Queued(task) => task.send(record),
            Mode::Direct { sink, format } => {
                let line = format.render(&record);
                let mut sink = sink.lock();
                // Best-effort: console write failures are swallowed.
                let _ = sink.write_all(line.as_bytes());
                let _ = sink.flush();
            }
        }
    }

    fn close(&mut self) {
        match &mut self.mode {
            Mode::Queued(task) => task.close(),
            Mode::Direct { sink, .. } => {
                let _ = sink.lock().flush();
            }
        }
    }
}

/// Builder for [`ConsoleWriter`]
///
/// # Example
///
/// ```
/// use fanlog::writers::ConsoleWriter;
/// use fanlog::FORMAT_SHORT;
///
/// let writer = ConsoleWriter::builder()
///     .format(FORMAT_SHORT)
///     .capacity(0)
///     .build();
/// ```
pub struct ConsoleWriterBuilder {
    template: String,
    capacity: Option<usize>,
    target: Option<Box<dyn Write + Send>>,
    synchronous: bool,
}

impl ConsoleWriterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: FORMAT_DEFAULT.to_string(),
            capacity: None,
            target: None,
            synchronous: false,
        }
    }

    /// Set the format template, compiled once at `build`.
    #[must_use]
    pub fn format(mut self, template: &str) -> Self {
        self.template = template.to_string();
        self
    }

    /// Override the queue capacity; 0 makes hand-off synchronous. Ignored in
    /// synchronous mode, which has no queue.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Redirect output to an arbitrary stream. Used in tests; defaults to
    /// standard output.
    #[must_use]
    pub fn target(mut self, sink: Box<dyn Write + Send>) -> Self {
        self.target = Some(sink);
        self
    }

    /// Use the mutex-guarded direct-write design instead of the consumption
    /// task.
    #[must_use]
    pub fn synchronous(mut self) -> Self {
        self.synchronous = true;
        self
    }

    #[must_use]
    pub fn build(self) -> ConsoleWriter {
        let format = RecordFormat::compile(&self.template);
        let mut sink = self
            .target
            .unwrap_or_else(|| Box::new(std::io::stdout()) as Box<dyn Write + Send>);

        let mode = if self.synchronous {
            Mode::Direct {
                sink: Mutex::new(sink),
                format,
            }
        } else {
            let capacity = self.capacity.unwrap_or_else(default_buffer_length);
            Mode::Queued(ConsumerTask::spawn(capacity, move |receiver| {
                for record in receiver {
                    let line = format.render(&record);
                    let _ = sink.write_all(line.as_bytes());
                    let _ = sink.flush();
                }
                let _ = sink.flush();
            }))
        };

        ConsoleWriter { mode }
    }
}

impl Default for ConsoleWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
