use std::{
    fmt::{Display, Write as _},
    fs::File,
    io::Write,
    path::Path,
    sync::{
        Mutex,
        atomic::{AtomicU8, Ordering},
    },
};

use crate::{config::default_level, level::LogLevel};

/// A leveled logger appending one line per call to a single file.
///
/// All writes go through one mutex, so concurrent callers never interleave
/// partial lines. Logging calls never fail or panic: if the file could not be
/// opened at construction, every call becomes a silent no-op.
pub struct Logger {
    level: AtomicU8,
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Opens `path` in append mode with the threshold from the environment
    /// (see [`default_level`]).
    ///
    /// An open failure is reported once on stderr; the logger is still
    /// constructed and later calls discard their lines.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_level(path, default_level())
    }

    /// Same as [`Logger::new`] with an explicit threshold.
    pub fn with_level<P: AsRef<Path>>(path: P, level: LogLevel) -> Self {
        let file = match File::options().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("unable to open log file {}: {e}", path.as_ref().display());
                None
            }
        };
        Self {
            level: AtomicU8::new(level as u8),
            file: Mutex::new(file),
        }
    }

    /// Current threshold; calls below it are dropped.
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Replaces the threshold, effective for subsequent calls on any thread.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Formats and appends one line if `level` passes the threshold.
    ///
    /// A filtered-out call returns before any formatting or locking.
    /// Arguments are rendered in order with no separator between them, so
    /// callers embed their own spacing. Line layout:
    ///
    /// ```text
    /// YYYY-MM-DD HH:MM:SS [LEVEL] file:line - args
    /// ```
    pub fn log(&self, level: LogLevel, file: &str, line: u32, args: &[&dyn Display]) {
        if level < self.level() {
            return;
        }
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut entry = format!("{timestamp} [{level}] {file}:{line} - ");
        for arg in args {
            let _ = write!(entry, "{arg}");
        }
        entry.push('\n');
        self.append(&entry);
    }

    pub fn debug(&self, file: &str, line: u32, args: &[&dyn Display]) {
        self.log(LogLevel::Debug, file, line, args);
    }

    pub fn info(&self, file: &str, line: u32, args: &[&dyn Display]) {
        self.log(LogLevel::Info, file, line, args);
    }

    pub fn warning(&self, file: &str, line: u32, args: &[&dyn Display]) {
        self.log(LogLevel::Warning, file, line, args);
    }

    pub fn error(&self, file: &str, line: u32, args: &[&dyn Display]) {
        self.log(LogLevel::Error, file, line, args);
    }

    // The lock spans one complete line. Write errors are swallowed: a logger
    // must not destabilize its caller.
    fn append(&self, entry: &str) {
        if let Ok(mut guard) = self.file.lock()
            && let Some(file) = guard.as_mut()
        {
            let _ = file.write_all(entry.as_bytes());
        }
    }
}

#[test]
fn test_threshold_filtering() {
    std::fs::remove_file("/tmp/linelog_threshold.log").ok();
    let logger = Logger::with_level("/tmp/linelog_threshold.log", LogLevel::Info);
    logger.debug("main.rs", 10, &[&"hi"]);
    logger.info("main.rs", 11, &[&"started"]);
    let content = std::fs::read_to_string("/tmp/linelog_threshold.log").unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(!content.contains("hi"));
    assert!(content.contains("started"));
}

#[test]
fn test_line_format() {
    std::fs::remove_file("/tmp/linelog_format.log").ok();
    let logger = Logger::with_level("/tmp/linelog_format.log", LogLevel::Debug);
    logger.info("main.rs", 42, &[&"started"]);
    let content = std::fs::read_to_string("/tmp/linelog_format.log").unwrap();
    let re = regex::Regex::new(
        r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} \[INFO\] main\.rs:42 - started\n$",
    )
    .unwrap();
    assert!(re.is_match(&content), "unexpected line: {content:?}");
}

#[test]
fn test_args_concatenated_without_separator() {
    std::fs::remove_file("/tmp/linelog_args.log").ok();
    let logger = Logger::with_level("/tmp/linelog_args.log", LogLevel::Debug);
    logger.error("main.rs", 12, &[&"code=", &42]);
    logger.warning("main.rs", 13, &[]);
    let content = std::fs::read_to_string("/tmp/linelog_args.log").unwrap();
    let mut lines = content.lines();
    assert!(lines.next().unwrap().ends_with("- code=42"));
    assert!(lines.next().unwrap().ends_with("- "));
    assert!(lines.next().is_none());
}

#[test]
fn test_set_level_idempotent() {
    std::fs::remove_file("/tmp/linelog_idempotent.log").ok();
    let logger = Logger::with_level("/tmp/linelog_idempotent.log", LogLevel::Debug);
    logger.set_level(LogLevel::Info);
    logger.set_level(LogLevel::Info);
    logger.debug("main.rs", 1, &[&"dropped"]);
    let content = std::fs::read_to_string("/tmp/linelog_idempotent.log").unwrap();
    assert!(content.is_empty());
    logger.set_level(LogLevel::Debug);
    logger.debug("main.rs", 2, &[&"kept"]);
    let content = std::fs::read_to_string("/tmp/linelog_idempotent.log").unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_unopenable_path_degrades_silently() {
    let logger = Logger::new("/tmp/linelog_no_such_dir/out.log");
    logger.error("main.rs", 1, &[&"lost"]);
    logger.set_level(LogLevel::Debug);
    logger.debug("main.rs", 2, &[&"also lost"]);
}

#[test]
fn test_concurrent_writers_produce_whole_lines() {
    use std::sync::Arc;

    std::fs::remove_file("/tmp/linelog_concurrent.log").ok();
    let logger = Arc::new(Logger::with_level(
        "/tmp/linelog_concurrent.log",
        LogLevel::Debug,
    ));
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..50 {
                    logger.info("worker.rs", i, &[&"thread ", &t, &" message ", &i]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let content = std::fs::read_to_string("/tmp/linelog_concurrent.log").unwrap();
    assert!(content.ends_with('\n'));
    let re = regex::Regex::new(
        r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} \[INFO\] worker\.rs:\d+ - thread \d message \d+$",
    )
    .unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 8 * 50);
    for line in lines {
        assert!(re.is_match(line), "torn line: {line:?}");
    }
}
