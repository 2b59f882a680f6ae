//! Output backends
//!
//! Each writer owns a bounded input queue and one consumption task that
//! exclusively owns the sink, so no writer needs internal locking beyond the
//! console's optional direct-write mutex. Delivery is best-effort: sink
//! failures after construction are swallowed, not propagated to producers.

pub mod console;
pub mod file;
#[cfg(unix)]
pub mod syslog;
mod worker;

pub use console::{ConsoleWriter, ConsoleWriterBuilder};
pub use file::{FileWriter, FileWriterBuilder};
#[cfg(unix)]
pub use syslog::{
    SyslogWriter, LOCAL0, LOCAL1, LOCAL2, LOCAL3, LOCAL4, LOCAL5, LOCAL6, LOCAL7,
};
