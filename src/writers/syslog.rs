//! Syslog writer implementation
//!
//! Connects to the local syslog daemon over a unix-domain socket and emits
//! RFC3164-style lines: `<priority>timestamp host tag: message`. Discovery
//! probes datagram sockets first, then stream sockets, each against
//! `/dev/log` then `/var/run/syslog`; the first successful connect wins.
//! The consumption task owns the socket exclusively and closes it once the
//! drain completes.

use super::worker::ConsumerTask;
use crate::core::{
    error::{LoggerError, Result},
    record::Record,
    writer::{default_buffer_length, LogWriter},
};
use chrono::SecondsFormat;
use std::io::{self, Write};
use std::os::unix::net::{UnixDatagram, UnixStream};

pub const LOCAL0: u32 = 16;
pub const LOCAL1: u32 = 17;
pub const LOCAL2: u32 = 18;
pub const LOCAL3: u32 = 19;
pub const LOCAL4: u32 = 20;
pub const LOCAL5: u32 = 21;
pub const LOCAL6: u32 = 22;
pub const LOCAL7: u32 = 23;

const SYSLOG_PATHS: [&str; 2] = ["/dev/log", "/var/run/syslog"];

enum SyslogSocket {
    Datagram(UnixDatagram),
    Stream(UnixStream),
}

impl SyslogSocket {
    fn connect() -> io::Result<Self> {
        let mut last_err = None;
        for path in SYSLOG_PATHS {
            match UnixDatagram::unbound().and_then(|sock| sock.connect(path).map(|()| sock)) {
                Ok(sock) => return Ok(Self::Datagram(sock)),
                Err(err) => last_err = Some(err),
            }
        }
        for path in SYSLOG_PATHS {
            match UnixStream::connect(path) {
                Ok(sock) => return Ok(Self::Stream(sock)),
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no syslog socket")))
    }

    fn send(&mut self, line: &[u8]) -> io::Result<()> {
        match self {
            Self::Datagram(sock) => sock.send(line).map(|_| ()),
            Self::Stream(sock) => sock.write_all(line),
        }
    }
}

fn wire_line(priority: u32, timestamp: &str, host: &str, record: &Record) -> String {
    format!(
        "<{}>{} {} {}: {}\n",
        priority, timestamp, host, record.source, record.message
    )
}

pub struct SyslogWriter {
    task: ConsumerTask,
}

impl SyslogWriter {
    /// Connect to the local syslog daemon and start the consumption task
    /// with the default queue capacity. `facility` is one of the
    /// `LOCAL0..=LOCAL7` codes; the wire priority of each record is
    /// `facility * 8 + level ordinal`.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SyslogUnavailable`], after printing a
    /// diagnostic to stderr, when no probed socket accepts a connection.
    /// Callers must check before use.
    pub fn new(facility: u32) -> Result<Self> {
        Self::with_capacity(facility, default_buffer_length())
    }

    /// Like [`SyslogWriter::new`] with an explicit queue capacity; 0 makes
    /// hand-off synchronous.
    pub fn with_capacity(facility: u32, capacity: usize) -> Result<Self> {
        let host = match hostname::get() {
            Ok(name) => name.to_string_lossy().into_owned(),
            Err(err) => {
                eprintln!("cannot obtain hostname: {}", err);
                "unknown".to_string()
            }
        };
        let mut socket = SyslogSocket::connect().map_err(|err| {
            eprintln!("SyslogWriter: cannot connect to syslog daemon: {}", err);
            LoggerError::SyslogUnavailable
        })?;

        let offset = facility * 8;
        let task = ConsumerTask::spawn(capacity, move |receiver| {
            // Timestamp string cached per second of record time.
            let mut timestamp = String::new();
            let mut stamped_at = i64::MIN;
            for record in receiver {
                let secs = record.created.timestamp();
                if secs != stamped_at {
                    timestamp = record.created.to_rfc3339_opts(SecondsFormat::Secs, true);
                    stamped_at = secs;
                }
                let priority = offset + u32::from(record.level.ordinal());
                let line = wire_line(priority, &timestamp, &host, &record);
                // Best-effort: a broken socket drops the record.
                let _ = socket.send(line.as_bytes());
            }
        });

        Ok(Self { task })
    }
}

impl LogWriter for SyslogWriter {
    fn log_write(&self, record: Record) {
        self.task.send(record);
    }

    fn close(&mut self) {
        self.task.close();
    }
}
