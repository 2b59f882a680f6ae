//! Logging macros for ergonomic message formatting.
//!
//! These wrap the dispatcher's `format_args!`-based methods so arguments are
//! only formatted when a filter actually admits the level.
//!
//! # Examples
//!
//! ```
//! use fanlog::{Logger, Level};
//! use fanlog::{info, debug};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! debug!(logger, "Config: {:?}", vec!["a", "b"]);
//! ```

/// Log a message at an explicit level with lazy formatting.
///
/// # Examples
///
/// ```
/// # use fanlog::{Logger, Level};
/// # let logger = Logger::new();
/// use fanlog::logf;
/// logf!(logger, Level::Info, "Simple message");
/// logf!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a finest-level message.
#[macro_export]
macro_rules! finest {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Finest, $($arg)+)
    };
}

/// Log a fine-level message.
#[macro_export]
macro_rules! fine {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Fine, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message; evaluates to the formatted message as a
/// [`crate::LoggerError`] for propagation.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Log an error-level message; evaluates to the formatted message as a
/// [`crate::LoggerError`] for propagation.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

/// Log a critical-level message; evaluates to the formatted message as a
/// [`crate::LoggerError`] for propagation.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.critical(format_args!($($arg)+))
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Alert, $($arg)+)
    };
}

/// Log an emergency-level message.
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Emergency, $($arg)+)
    };
}
