//! Call-site capture macros.
//!
//! Each macro forwards to the matching [`Logger`](crate::Logger) entry point
//! with the invoking `file!()` and `line!()`, so the logged source location is
//! the macro call, not an intermediate helper.

/// Logs at DEBUG with the invoking file and line.
///
/// Arguments after the logger are rendered in order with no separators.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(file!(), line!(), &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs at INFO with the invoking file and line.
#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(file!(), line!(), &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs at WARNING with the invoking file and line.
#[macro_export]
macro_rules! log_warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warning(file!(), line!(), &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs at ERROR with the invoking file and line.
#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(file!(), line!(), &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[test]
fn test_macro_captures_call_site() {
    std::fs::remove_file("/tmp/linelog_macro.log").ok();
    let logger = crate::Logger::with_level("/tmp/linelog_macro.log", crate::LogLevel::Debug);
    let call_line = line!() + 1;
    crate::log_warning!(logger, "x=", 1);
    let content = std::fs::read_to_string("/tmp/linelog_macro.log").unwrap();
    assert!(content.contains(&format!("[WARNING] {}:{} - x=1", file!(), call_line)));
}

#[test]
fn test_macro_respects_threshold() {
    std::fs::remove_file("/tmp/linelog_macro_filter.log").ok();
    let logger = crate::Logger::with_level("/tmp/linelog_macro_filter.log", crate::LogLevel::Error);
    crate::log_debug!(logger, "dropped");
    crate::log_info!(logger);
    crate::log_error!(logger, "kept ", 2u8, " args");
    let content = std::fs::read_to_string("/tmp/linelog_macro_filter.log").unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.trim_end().ends_with("- kept 2 args"));
}
