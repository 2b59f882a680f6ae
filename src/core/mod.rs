//! Core logging types and the dispatcher

pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod record;
pub mod writer;

pub use error::{LoggerError, Result};
pub use format::{RecordFormat, FORMAT_ABBREV, FORMAT_DEFAULT, FORMAT_SHORT};
pub use level::Level;
pub use logger::{Filter, Logger};
pub use record::Record;
pub use writer::{default_buffer_length, set_default_buffer_length, LogWriter};
