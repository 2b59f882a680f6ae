//! Error types for the logging system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File writer construction error with path
    #[error("file writer error for '{path}': {message}")]
    FileWriter { path: String, message: String },

    /// No syslog daemon reachable on any probed socket
    #[error("cannot connect to syslog daemon")]
    SyslogUnavailable,

    /// Writer error (generic)
    #[error("writer error: {0}")]
    Writer(String),

    /// A formatted log message, returned by `Logger::warn`, `error`, and
    /// `critical` so callers can propagate it as their own error value.
    /// It does not indicate that logging failed.
    #[error("{0}")]
    Message(String),
}

impl LoggerError {
    /// Create a file writer error
    pub fn file_writer(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileWriter {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::Writer(msg.into())
    }

    /// Create a message-carrying error
    pub fn message<S: Into<String>>(msg: S) -> Self {
        LoggerError::Message(msg.into())
    }
}
