//! Logger dispatcher
//!
//! A `Logger` is a mapping from filter name to `(threshold, writer)` pairs.
//! Dispatching runs entirely on the caller's thread; the only concurrency is
//! inside the writers themselves. The filter map carries no internal
//! synchronization: an application that mutates and logs from multiple
//! threads must serialize access itself.

use super::{
    error::LoggerError,
    format::FORMAT_DEFAULT,
    level::Level,
    record::Record,
    writer::LogWriter,
};
use crate::writers::ConsoleWriter;
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;
use std::panic::Location;

/// A named routing entry: records at or above `level` go to `writer`.
pub struct Filter {
    pub level: Level,
    pub writer: Box<dyn LogWriter>,
}

/// The dispatcher. Create one, register filters, log through the
/// severity-named methods or the [`crate::logf!`]-family macros.
#[derive(Default)]
pub struct Logger {
    filters: HashMap<String, Filter>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// A logger with a single `"stdout"` console filter at `threshold`,
    /// using the default long format.
    #[must_use]
    pub fn with_console(threshold: Level) -> Self {
        let mut logger = Self::new();
        logger.add_filter(
            "stdout",
            threshold,
            Box::new(ConsoleWriter::builder().format(FORMAT_DEFAULT).build()),
        );
        logger
    }

    /// Insert or replace the filter registered under `name`.
    ///
    /// Replacing drops the previous filter, which closes its writer and
    /// blocks until that writer has drained. Close a writer explicitly
    /// before replacement if that pause matters.
    pub fn add_filter(
        &mut self,
        name: impl Into<String>,
        level: Level,
        writer: Box<dyn LogWriter>,
    ) -> &mut Self {
        self.filters.insert(name.into(), Filter { level, writer });
        self
    }

    pub fn filter(&self, name: &str) -> Option<&Filter> {
        self.filters.get(name)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Close every registered writer, draining each, and clear the map.
    pub fn close(&mut self) {
        for filter in self.filters.values_mut() {
            filter.writer.close();
        }
        self.filters.clear();
    }

    /// True when at least one filter admits `level`.
    fn reaches(&self, level: Level) -> bool {
        self.filters.values().any(|filter| level >= filter.level)
    }

    /// Fan a message out to every filter whose threshold admits `level`.
    /// Each accepting writer receives its own record; they all share one
    /// creation stamp.
    fn dispatch(&self, level: Level, source: &str, message: &str) {
        let created = Utc::now();
        for filter in self.filters.values() {
            if level < filter.level {
                continue;
            }
            filter
                .writer
                .log_write(Record::new(level, source, message).with_created(created));
        }
    }

    /// Log an already-formatted message with an explicit source. Filters
    /// whose threshold excludes `level` see no work at all, not even record
    /// construction.
    pub fn log(&self, level: Level, source: &str, message: &str) {
        self.dispatch(level, source, message);
    }

    /// Log with `format_args!`-style lazy formatting. The arguments are
    /// formatted only when some filter admits `level`; the source is the
    /// caller's `file:line`.
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.reaches(level) {
            return;
        }
        self.dispatch(level, &caller_source(), &args.to_string());
    }

    /// Log a message produced by a closure, invoked only when some filter
    /// admits `level`. Use this when message construction is expensive.
    #[track_caller]
    pub fn logc(&self, level: Level, message: impl FnOnce() -> String) {
        if !self.reaches(level) {
            return;
        }
        self.dispatch(level, &caller_source(), &message());
    }

    #[track_caller]
    pub fn finest(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Finest, args);
    }

    #[track_caller]
    pub fn fine(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Fine, args);
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    #[track_caller]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Trace, args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    #[track_caller]
    pub fn alert(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Alert, args);
    }

    #[track_caller]
    pub fn emergency(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Emergency, args);
    }

    /// Log at WARNING and return the formatted message as an error value,
    /// enabling `return Err(logger.warn(...))` propagation. The message is
    /// formatted unconditionally because it is returned either way; the
    /// returned error does not mean logging failed.
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) -> LoggerError {
        self.log_returning(Level::Warning, args)
    }

    /// Log at ERROR and return the formatted message as an error value.
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) -> LoggerError {
        self.log_returning(Level::Error, args)
    }

    /// Log at CRITICAL and return the formatted message as an error value.
    #[track_caller]
    pub fn critical(&self, args: fmt::Arguments<'_>) -> LoggerError {
        self.log_returning(Level::Critical, args)
    }

    #[track_caller]
    fn log_returning(&self, level: Level, args: fmt::Arguments<'_>) -> LoggerError {
        let message = args.to_string();
        if self.reaches(level) {
            self.dispatch(level, &caller_source(), &message);
        }
        LoggerError::Message(message)
    }
}

#[track_caller]
fn caller_source() -> String {
    let location = Location::caller();
    format!("{}:{}", location.file(), location.line())
}
