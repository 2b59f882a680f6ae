//! File writer implementation
//!
//! Appends rendered records to a single file, one line per record, from a
//! dedicated consumption task that exclusively owns the handle. Rotation and
//! retention are out of scope: the only on-open behavior is append versus
//! truncate.

use super::worker::ConsumerTask;
use crate::core::{
    error::Result,
    format::{RecordFormat, FORMAT_DEFAULT},
    record::Record,
    writer::{default_buffer_length, LogWriter},
};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct FileWriter {
    path: PathBuf,
    task: ConsumerTask,
}

impl FileWriter {
    /// Open `path` and start the consumption task with default capacity and
    /// the default long format. `append` false truncates on open.
    ///
    /// # Errors
    ///
    /// Construction fails when the file cannot be opened, e.g. permission
    /// denied. Failures are surfaced here; write errors after construction
    /// are best-effort and swallowed.
    pub fn new(path: impl Into<PathBuf>, append: bool) -> Result<Self> {
        Self::builder(path).append(append).build()
    }

    #[must_use]
    pub fn builder(path: impl Into<PathBuf>) -> FileWriterBuilder {
        FileWriterBuilder::new(path)
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LogWriter for FileWriter {
    fn log_write(&self, record: Record) {
        self.task.send(record);
    }

    fn close(&mut self) {
        self.task.close();
    }
}

/// Builder for [`FileWriter`]
///
/// # Example
///
/// ```no_run
/// use fanlog::writers::FileWriter;
/// use fanlog::FORMAT_ABBREV;
///
/// let writer = FileWriter::builder("/var/log/app.log")
///     .append(true)
///     .capacity(0)
///     .format(FORMAT_ABBREV)
///     .build()
///     .expect("open log file");
/// ```
pub struct FileWriterBuilder {
    path: PathBuf,
    append: bool,
    capacity: Option<usize>,
    template: String,
}

impl FileWriterBuilder {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append: true,
            capacity: None,
            template: FORMAT_DEFAULT.to_string(),
        }
    }

    /// Append to an existing file (default) or truncate it on open.
    #[must_use]
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Override the queue capacity; 0 makes hand-off synchronous.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the format template, compiled once at `build`.
    #[must_use]
    pub fn format(mut self, template: &str) -> Self {
        self.template = template.to_string();
        self
    }

    pub fn build(self) -> Result<FileWriter> {
        let mut options = OpenOptions::new();
        options.create(true);
        if self.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options.open(&self.path)?;

        let format = RecordFormat::compile(&self.template);
        let capacity = self.capacity.unwrap_or_else(default_buffer_length);
        let mut sink = BufWriter::new(file);
        let task = ConsumerTask::spawn(capacity, move |receiver| {
            for record in receiver {
                let line = format.render(&record);
                // Best-effort: a full disk or vanished file drops the record.
                let _ = sink.write_all(line.as_bytes());
                let _ = sink.flush();
            }
            let _ = sink.flush();
        });

        Ok(FileWriter {
            path: self.path,
            task,
        })
    }
}
