//! # fanlog
//!
//! A level-filtered logging dispatcher with pluggable, queue-fed output
//! writers.
//!
//! Producers log through a [`Logger`], which routes each message to the
//! named filters whose severity threshold it meets. Every writer (console,
//! file, syslog) owns a bounded queue drained by its own consumption task,
//! with blocking enqueue, in-order rendering through a compiled format
//! template, and a drain-on-close guarantee. Delivery is best-effort: sink
//! failures never reach the producer.
//!
//! ```no_run
//! use fanlog::{Logger, Level};
//! use fanlog::writers::FileWriter;
//!
//! let mut logger = Logger::with_console(Level::Info);
//! logger.add_filter(
//!     "file",
//!     Level::Debug,
//!     Box::new(FileWriter::new("app.log", true).expect("open log file")),
//! );
//!
//! fanlog::info!(logger, "listening on port {}", 8080);
//! logger.close();
//! ```

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        default_buffer_length, set_default_buffer_length, Filter, Level, LogWriter, Logger,
        LoggerError, Record, RecordFormat, Result, FORMAT_ABBREV, FORMAT_DEFAULT, FORMAT_SHORT,
    };
    pub use crate::writers::{ConsoleWriter, FileWriter};
    #[cfg(unix)]
    pub use crate::writers::SyslogWriter;
}

pub use self::core::{
    default_buffer_length, set_default_buffer_length, Filter, Level, LogWriter, Logger,
    LoggerError, Record, RecordFormat, Result, FORMAT_ABBREV, FORMAT_DEFAULT, FORMAT_SHORT,
};
pub use writers::{ConsoleWriter, FileWriter};
#[cfg(unix)]
pub use writers::SyslogWriter;
