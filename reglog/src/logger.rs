use std::{
    path::PathBuf,
    sync::{Mutex, MutexGuard, PoisonError},
};

use chrono::Local;
use reglog_core::{
    HeaderTemplate, LogFile, RecordContext, Result, Settings, Severity, SeverityMask,
};

/// A named logger appending records to `path + name`.
///
/// Loggers are created by a [`Registry`](crate::Registry) and shared as
/// `Arc<Logger>`. One lock guards both the settings and the write path, so
/// records of one logger never interleave and a settings change never lands
/// in the middle of a write.
#[derive(Debug)]
pub struct Logger {
    settings: Mutex<Settings>,
}

impl Logger {
    /// Wraps `settings` and activates every severity.
    pub(crate) fn new(settings: Settings) -> Self {
        let logger = Self {
            settings: Mutex::new(settings),
        };
        logger.enable_all_severity();
        logger
    }

    fn lock(&self) -> MutexGuard<'_, Settings> {
        self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends one record: the rendered header, `message` and a newline.
    ///
    /// Returns `Ok(false)` without touching the disk when the logger is
    /// disabled or `severity` is not active. Fails with
    /// [`Error::OpenFailed`](crate::Error::OpenFailed) or
    /// [`Error::WriteFailed`](crate::Error::WriteFailed) when the file cannot
    /// be opened or written.
    pub fn write(
        &self,
        severity: Severity,
        file: &str,
        function: &str,
        line: u32,
        message: &str,
    ) -> Result<bool> {
        let settings = self.lock();
        if !settings.is_enabled() || !settings.active_severity().contains(severity) {
            return Ok(false);
        }
        let ctx = RecordContext {
            file,
            function,
            line,
            severity,
        };
        let header = HeaderTemplate::new(settings.header_format()).render(&ctx, &Local::now());
        LogFile::new(settings.file_path())
            .append(&header, message)
            .inspect_err(|err| log::warn!("logger {}: {err}", settings.name()))?;
        Ok(true)
    }

    pub fn check_active_severity(&self, level: Severity) -> bool {
        self.lock().active_severity().contains(level)
    }

    pub fn active_severity(&self) -> SeverityMask {
        self.lock().active_severity()
    }

    pub fn set_active_severity(&self, mask: impl Into<SeverityMask>) {
        self.lock().set_active_severity(mask);
    }

    pub fn add_active_severity(&self, mask: impl Into<SeverityMask>) {
        let mut settings = self.lock();
        let mask = settings.active_severity().union(mask.into());
        settings.set_active_severity(mask);
    }

    /// Deactivates the levels of `mask`. Levels that were not active stay
    /// inactive.
    pub fn remove_active_severity(&self, mask: impl Into<SeverityMask>) {
        let mut settings = self.lock();
        let mask = settings.active_severity().difference(mask.into());
        settings.set_active_severity(mask);
    }

    /// Flips the levels of `mask`: active ones are deactivated, inactive ones
    /// are activated.
    pub fn toggle_active_severity(&self, mask: impl Into<SeverityMask>) {
        let mut settings = self.lock();
        let mask = settings.active_severity().symmetric_difference(mask.into());
        settings.set_active_severity(mask);
    }

    /// Activates Debug, Fatal, Error, Warning and Info.
    pub fn enable_all_severity(&self) {
        self.set_active_severity(SeverityMask::ALL);
    }

    pub fn set_debug_severity_enabled(&self, enabled: bool) {
        if enabled {
            self.add_active_severity(Severity::Debug);
        } else {
            self.remove_active_severity(Severity::Debug);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().is_enabled()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.lock().set_enabled(enabled);
    }

    pub fn header_format(&self) -> String {
        self.lock().header_format().to_owned()
    }

    pub fn set_header_format(&self, header_format: impl Into<String>) {
        self.lock().set_header_format(header_format);
    }

    pub fn name(&self) -> String {
        self.lock().name().to_owned()
    }

    pub fn path(&self) -> String {
        self.lock().path().to_owned()
    }

    pub fn file_path(&self) -> PathBuf {
        self.lock().file_path()
    }

    /// Copy of the current settings.
    pub fn settings(&self) -> Settings {
        self.lock().clone()
    }
}
