use std::sync::Arc;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::registry::Registry;

/// `log` backend routing every record to one logger of a registry.
///
/// Records from reglog itself are ignored: they describe the loggers and
/// must not be written through them.
pub struct RegistryLog {
    registry: Arc<Registry>,
    logger: String,
}

impl RegistryLog {
    pub fn new(registry: Arc<Registry>, logger: impl Into<String>) -> Self {
        Self {
            registry,
            logger: logger.into(),
        }
    }

    /// Installs this backend as the global `log` logger.
    pub fn init(self, level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

fn is_internal(target: &str) -> bool {
    matches!(target.split("::").next(), Some("reglog" | "reglog_core"))
}

impl Log for RegistryLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        !is_internal(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(logger) = self.registry.get(&self.logger) else {
            return;
        };
        // `Log::log` has no error channel; a failed record is dropped.
        let _ = logger.write(
            record.level().into(),
            record.file().unwrap_or("<unknown>"),
            record.module_path().unwrap_or(record.target()),
            record.line().unwrap_or(0),
            &record.args().to_string(),
        );
    }

    fn flush(&self) {}
}
