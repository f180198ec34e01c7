use std::sync::Arc;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::{level::LogLevel, logger::Logger};

/// Adapter routing `log` crate records into a [`Logger`].
struct FacadeLogger(Arc<Logger>);

impl Log for FacadeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        LogLevel::from(metadata.level()) >= self.0.level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let file = record.file().unwrap_or("<unknown>");
        let line = record.line().unwrap_or(0);
        self.0
            .log(record.level().into(), file, line, &[record.args()]);
    }

    fn flush(&self) {}
}

/// Installs `logger` as the global backend of the `log` facade, so
/// `log::info!` and friends append to its file.
///
/// The facade's max level is left wide open and filtering stays inside the
/// logger, so [`Logger::set_level`] keeps working after installation. Fails
/// if a global logger is already set.
pub fn init_global(logger: Arc<Logger>) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(FacadeLogger(logger)))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
