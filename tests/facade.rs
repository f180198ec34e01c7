use std::sync::Arc;

use linelog::{LogLevel, Logger, init_global};

// Single test: the log facade allows one global install per process.
#[test]
fn facade_routes_records_to_file() {
    std::fs::remove_file("/tmp/linelog_facade.log").ok();
    let logger = Arc::new(Logger::with_level("/tmp/linelog_facade.log", LogLevel::Debug));
    init_global(Arc::clone(&logger)).unwrap();

    log::warn!("disk almost full: {}%", 93);
    let content = std::fs::read_to_string("/tmp/linelog_facade.log").unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("[WARNING] tests/facade.rs:"));
    assert!(content.trim_end().ends_with("- disk almost full: 93%"));

    // installing twice is an error
    assert!(init_global(Arc::clone(&logger)).is_err());

    // threshold changes keep applying after installation
    logger.set_level(LogLevel::Error);
    log::info!("ignored");
    log::error!("kept");
    let content = std::fs::read_to_string("/tmp/linelog_facade.log").unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(!content.contains("ignored"));
    assert!(content.contains("[ERROR]"));
}
