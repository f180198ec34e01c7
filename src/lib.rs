//! # linelog
//! Thread-safe leveled file logger: timestamped lines with call-site capture.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! linelog = "0.1.0"
//! ```
//!
//! ```rust
//! use linelog::{LogLevel, Logger, log_debug, log_info};
//!
//! let logger = Logger::with_level("/tmp/linelog_doc.log", LogLevel::Info);
//! log_debug!(logger, "dropped, below threshold");
//! log_info!(logger, "listening on port ", 8080);
//! assert!(
//!     std::fs::read_to_string("/tmp/linelog_doc.log")
//!         .unwrap()
//!         .ends_with("listening on port 8080\n")
//! );
//! ```
//!
//! Each call appends one line of the form
//! `YYYY-MM-DD HH:MM:SS [LEVEL] file:line - message`, with the file and line
//! of the macro invocation. Arguments are concatenated with no separator.
//! `Logger::new` takes the threshold from `LINELOG_LEVEL` (default `INFO`).
//!
//! ## Multi-threaded logging
//! A logger is shared across threads behind an [`Arc`](std::sync::Arc); the
//! write lock guarantees whole, never interleaved lines.
//!
//! ```rust
//! use std::sync::Arc;
//! use linelog::{LogLevel, Logger, log_warning};
//!
//! let logger = Arc::new(Logger::with_level("/tmp/linelog_doc_mt.log", LogLevel::Debug));
//! let handles: Vec<_> = (0..5)
//!     .map(|i| {
//!         let logger = Arc::clone(&logger);
//!         std::thread::spawn(move || log_warning!(logger, "hello from thread ", i))
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//! ```
//!
//! ## Use as a `log` backend
//! The logger can serve the `log` facade, so existing `log::info!` call sites
//! land in the file with their own source locations.
//!
//! ```rust
//! use std::sync::Arc;
//! use linelog::{LogLevel, Logger};
//!
//! let logger = Arc::new(Logger::with_level("/tmp/linelog_doc_facade.log", LogLevel::Debug));
//! linelog::init_global(Arc::clone(&logger)).unwrap();
//! log::info!("Hello, world!");
//! logger.set_level(LogLevel::Error); // filtering stays adjustable after install
//! ```
//!
//! Logging never panics and never returns an error: a file that cannot be
//! opened is reported once on stderr and the logger silently drops all
//! subsequent lines.

mod config;
mod facade;
mod level;
mod logger;
mod macros;

pub use config::default_level;
pub use facade::init_global;
pub use level::{LogLevel, ParseLevelError};
pub use logger::Logger;
