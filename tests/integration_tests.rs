//! Integration tests for the logging dispatcher
//!
//! These tests verify:
//! - Threshold filtering (records below a filter's level never reach it)
//! - Drain-on-close for queued writers
//! - Golden format output for the canonical templates
//! - Lazy evaluation of logf/logc arguments
//! - Filter replacement semantics
//! - The end-to-end unbuffered file scenario

use fanlog::prelude::*;
use fanlog::writers::ConsoleWriter;
use parking_lot::Mutex;
use std::fs;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Test writer that counts records without doing any I/O.
struct CountingWriter {
    count: Arc<AtomicUsize>,
}

impl LogWriter for CountingWriter {
    fn log_write(&self, _record: Record) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    fn close(&mut self) {}
}

/// In-memory sink shared between the test and a console writer.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("utf8 output")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_threshold_rejects_below_accepts_at_or_above() {
    for (i, threshold) in Level::ALL.iter().enumerate() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut logger = Logger::new();
        logger.add_filter(
            "counter",
            *threshold,
            Box::new(CountingWriter {
                count: Arc::clone(&count),
            }),
        );

        for level in Level::ALL {
            logger.log(level, "threshold_test", "message");
        }

        // Levels below the threshold are rejected, the rest accepted.
        assert_eq!(
            count.load(Ordering::SeqCst),
            Level::ALL.len() - i,
            "threshold {}",
            threshold
        );
    }
}

#[test]
fn test_file_writer_drains_on_close() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let log_file = temp_dir.path().join("drain.log");

    let mut logger = Logger::new();
    logger.add_filter(
        "file",
        Level::Debug,
        Box::new(
            FileWriter::builder(&log_file)
                .format(FORMAT_ABBREV)
                .build()
                .expect("create file writer"),
        ),
    );

    for i in 0..200 {
        logger.log(Level::Info, "drain_test", &format!("message {}", i));
    }
    logger.close();

    let content = fs::read_to_string(&log_file).expect("read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 200, "close must not return before the drain");
    assert_eq!(lines[0], "[INFO] message 0");
    assert_eq!(lines[199], "[INFO] message 199");
}

#[test]
fn test_end_to_end_unbuffered_file_filter() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let log_file = temp_dir.path().join("e2e.log");

    let mut logger = Logger::new();
    logger.add_filter(
        "file",
        Level::Debug,
        Box::new(
            FileWriter::builder(&log_file)
                .append(false)
                .capacity(0)
                .format("[%L] %M")
                .build()
                .expect("create file writer"),
        ),
    );

    logger.log(Level::Critical, "testsrc1", "This message is level 7");
    logger.logf(Level::Error, format_args!("This message is level {}", Level::Error));
    logger.logf(
        Level::Warning,
        format_args!("This message is level {}", Level::Warning),
    );
    logger.close();

    let content = fs::read_to_string(&log_file).expect("read log file");
    assert_eq!(
        content,
        "[CRIT] This message is level 7\n\
         [EROR] This message is level ERROR\n\
         [WARN] This message is level WARNING\n"
    );
}

#[test]
fn test_logf_does_not_format_unreachable_levels() {
    struct Observed(Arc<AtomicUsize>);

    impl std::fmt::Display for Observed {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            write!(f, "formatted")
        }
    }

    let mut logger = Logger::new();
    logger.add_filter(
        "counter",
        Level::Error,
        Box::new(CountingWriter {
            count: Arc::new(AtomicUsize::new(0)),
        }),
    );

    let formatted = Arc::new(AtomicUsize::new(0));
    logger.logf(
        Level::Debug,
        format_args!("{}", Observed(Arc::clone(&formatted))),
    );
    assert_eq!(formatted.load(Ordering::SeqCst), 0, "argument was formatted");

    logger.logf(
        Level::Critical,
        format_args!("{}", Observed(Arc::clone(&formatted))),
    );
    assert_eq!(formatted.load(Ordering::SeqCst), 1);
}

#[test]
fn test_logc_closure_not_invoked_when_filtered() {
    let mut logger = Logger::new();
    logger.add_filter(
        "counter",
        Level::Warning,
        Box::new(CountingWriter {
            count: Arc::new(AtomicUsize::new(0)),
        }),
    );

    let invoked = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&invoked);
    logger.logc(Level::Fine, move || {
        seen.fetch_add(1, Ordering::SeqCst);
        "expensive message".to_string()
    });
    assert_eq!(invoked.load(Ordering::SeqCst), 0);

    let seen = Arc::clone(&invoked);
    logger.logc(Level::Emergency, move || {
        seen.fetch_add(1, Ordering::SeqCst);
        "expensive message".to_string()
    });
    assert_eq!(invoked.load(Ordering::SeqCst), 1);
}

#[test]
fn test_add_filter_replaces_not_duplicates() {
    let mut logger = Logger::new();
    logger.add_filter(
        "out",
        Level::Debug,
        Box::new(CountingWriter {
            count: Arc::new(AtomicUsize::new(0)),
        }),
    );
    assert_eq!(logger.len(), 1);

    logger.add_filter(
        "out",
        Level::Critical,
        Box::new(CountingWriter {
            count: Arc::new(AtomicUsize::new(0)),
        }),
    );
    assert_eq!(logger.len(), 1, "same name must replace, not duplicate");
    assert_eq!(
        logger.filter("out").map(|f| f.level),
        Some(Level::Critical)
    );
}

#[test]
fn test_warn_error_critical_return_formatted_message() {
    let logger = Logger::new();

    let err = logger.warn(format_args!("{} {} {:?}", "Warning:", 1, Vec::<i32>::new()));
    assert_eq!(err.to_string(), "Warning: 1 []");

    let err = logger.error(format_args!("{} {} {:?}", "Error:", 10, Vec::<String>::new()));
    assert_eq!(err.to_string(), "Error: 10 []");

    let err = logger.critical(format_args!("{} {} {:?}", "Critical:", 100, Vec::<i64>::new()));
    assert_eq!(err.to_string(), "Critical: 100 []");
}

#[test]
fn test_error_return_value_usable_for_propagation() {
    fn failing(logger: &Logger) -> Result<()> {
        Err(logger.error(format_args!("bad state: {}", 42)))
    }

    let logger = Logger::new();
    let err = failing(&logger).expect_err("must propagate");
    assert_eq!(err.to_string(), "bad state: 42");
}

#[test]
fn test_console_golden_output_through_dispatcher() {
    let buf = SharedBuf::default();
    let mut logger = Logger::new();
    logger.add_filter(
        "console",
        Level::Debug,
        Box::new(
            ConsoleWriter::builder()
                .format(FORMAT_SHORT)
                .capacity(0)
                .target(Box::new(buf.clone()))
                .build(),
        ),
    );

    logger.log(Level::Error, "console_e2e", "message");
    logger.close();

    // The dispatcher stamps records at dispatch time; only the layout and
    // level code are stable here, the time fields are not.
    let output = buf.contents();
    assert!(output.ends_with("] [EROR] message\n"), "got {:?}", output);
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn test_console_synchronous_mode_ordering() {
    let buf = SharedBuf::default();
    let writer = ConsoleWriter::builder()
        .format(FORMAT_ABBREV)
        .target(Box::new(buf.clone()))
        .synchronous()
        .build();

    writer.log_write(Record::new(Level::Info, "sync_test", "first"));
    writer.log_write(Record::new(Level::Warning, "sync_test", "second"));
    writer.log_write(Record::new(Level::Error, "sync_test", "third"));

    assert_eq!(
        buf.contents(),
        "[INFO] first\n[WARN] second\n[EROR] third\n"
    );
}

#[test]
fn test_concurrent_producers_interleave_at_record_granularity() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let mut logger = Logger::new();
    logger.add_filter(
        "file",
        Level::Finest,
        Box::new(
            FileWriter::builder(&log_file)
                .capacity(8)
                .format("%S %M")
                .build()
                .expect("create file writer"),
        ),
    );
    let logger = Arc::new(logger);

    let mut handles = vec![];
    for thread_id in 0..5 {
        let logger = Arc::clone(&logger);
        handles.push(std::thread::spawn(move || {
            for i in 0..20 {
                logger.log(
                    Level::Info,
                    &format!("thread{}", thread_id),
                    &format!("message {}", i),
                );
            }
        }));
    }
    for handle in handles {
        handle.join().expect("producer panicked");
    }

    let mut logger = Arc::try_unwrap(logger).unwrap_or_else(|_| panic!("logger still shared"));
    logger.close();

    let content = fs::read_to_string(&log_file).expect("read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 100);

    // Each producer's own records stay in submission order.
    for thread_id in 0..5 {
        let tag = format!("thread{}", thread_id);
        let own: Vec<&str> = lines.iter().copied().filter(|l| l.starts_with(&tag)).collect();
        assert_eq!(own.len(), 20);
        for (i, line) in own.iter().enumerate() {
            assert_eq!(*line, format!("{} message {}", tag, i));
        }
    }
}

#[test]
fn test_with_console_default_logger() {
    let mut logger = Logger::with_console(Level::Warning);
    let filter = logger.filter("stdout").expect("stdout filter");
    assert_eq!(filter.level, Level::Warning);
    assert_eq!(logger.len(), 1);
    logger.close();
    assert!(logger.is_empty());
}

#[cfg(unix)]
#[test]
fn test_syslog_writer_checked_construction() {
    use fanlog::writers::syslog::LOCAL4;

    // Whether a daemon is listening depends on the host; both outcomes are
    // legal, panicking is not.
    match SyslogWriter::new(LOCAL4) {
        Ok(writer) => {
            let mut logger = Logger::new();
            logger.add_filter("syslog", Level::Debug, Box::new(writer));
            logger.log(Level::Info, "syslog_e2e", "This message is level INFO");
            fanlog::debug!(logger, "This message is level {}", Level::Debug);
            logger.close();
        }
        Err(err) => assert!(matches!(err, LoggerError::SyslogUnavailable)),
    }
}
