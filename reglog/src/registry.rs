use std::{
    collections::{HashMap, hash_map::Entry},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use reglog_core::{Error, MAX_NAME_LEN, Result, Settings};

use crate::logger::Logger;

/// Directory of the live loggers of a process, keyed by name.
///
/// Create one at startup and share it (for instance as `Arc<Registry>`) with
/// the code that logs. The map has its own lock, independent of the loggers'
/// write locks, so registration never waits on a record being written.
#[derive(Debug, Default)]
pub struct Registry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers an enabled logger writing to `path + name`, with every
    /// severity active and an empty header.
    pub fn build(&self, name: &str, path: &str) -> Result<()> {
        self.build_with_settings(Settings::new(name, path))
    }

    /// Registers a logger from prepared settings. The active severities of
    /// `settings` are replaced by all severities.
    pub fn build_with_settings(&self, settings: Settings) -> Result<()> {
        let len = settings.name().len();
        if !(1..=MAX_NAME_LEN).contains(&len) {
            return Err(Error::InvalidName { len });
        }
        match self.write().entry(settings.name().to_owned()) {
            Entry::Occupied(entry) => Err(Error::DuplicateName(entry.key().clone())),
            Entry::Vacant(entry) => {
                log::debug!(
                    "building logger {} at {}",
                    entry.key(),
                    settings.file_path().display()
                );
                entry.insert(Arc::new(Logger::new(settings)));
                Ok(())
            }
        }
    }

    /// Unregisters `name`. Handles obtained earlier through [`get`](Self::get)
    /// stay usable until they are dropped.
    pub fn destroy(&self, name: &str) -> Result<()> {
        match self.write().remove(name) {
            Some(_) => {
                log::debug!("destroyed logger {name}");
                Ok(())
            }
            None => Err(Error::NotFound(name.to_owned())),
        }
    }

    pub fn get(&self, name: &str) -> Result<Arc<Logger>> {
        self.read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use reglog_core::{ErrorKind, Severity, SeverityMask};

    use super::*;

    #[test]
    fn test_build_then_get() {
        let registry = Registry::new();
        registry.build("app", "/tmp/").unwrap();
        let logger = registry.get("app").unwrap();
        assert_eq!(logger.name(), "app");
        assert_eq!(logger.active_severity(), SeverityMask::ALL);
        assert!(registry.contains("app"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_name_length_bounds() {
        let registry = Registry::new();
        let err = registry.build("", "/tmp/").unwrap_err();
        assert!(matches!(err, Error::InvalidName { len: 0 }));

        let too_long = "X".repeat(MAX_NAME_LEN + 1);
        let err = registry.build(&too_long, "/tmp/").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidName);
        assert!(registry.is_empty());

        registry.build(&"X".repeat(MAX_NAME_LEN), "/tmp/").unwrap();
        registry.build("x", "/tmp/").unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_name_length_counts_bytes() {
        let registry = Registry::new();
        let name = "é".repeat(128);
        assert_eq!(name.chars().count(), 128);
        let err = registry.build(&name, "/tmp/").unwrap_err();
        assert!(matches!(err, Error::InvalidName { len: 256 }));
    }

    #[test]
    fn test_duplicate_name() {
        let registry = Registry::new();
        registry.build("app", "/tmp/").unwrap();
        registry.get("app").unwrap().set_header_format("first");
        let err = registry.build("app", "/var/tmp/").unwrap_err();
        assert!(matches!(err, Error::DuplicateName(ref name) if name == "app"));
        let logger = registry.get("app").unwrap();
        assert_eq!(logger.path(), "/tmp/");
        assert_eq!(logger.header_format(), "first");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let registry = Registry::new();
        registry.build("App", "/tmp/").unwrap();
        registry.build("app", "/tmp/").unwrap();
        assert_eq!(registry.names(), ["App", "app"]);
        assert_eq!(registry.get("APP").unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_destroy() {
        let registry = Registry::new();
        registry.build("log_to_destroy", "/tmp/").unwrap();
        let err = registry.destroy("wrong_log_name").unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "wrong_log_name"));
        registry.destroy("log_to_destroy").unwrap();
        assert!(!registry.contains("log_to_destroy"));
        assert_eq!(
            registry.destroy("log_to_destroy").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_get_unknown() {
        let registry = Registry::new();
        registry.build("log_to_get", "/tmp/").unwrap();
        let err = registry.get("wrong_log_name").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(registry.get("log_to_get").is_ok());
    }

    #[test]
    fn test_build_with_settings_keeps_flags() {
        let registry = Registry::new();
        let mut settings = Settings::with_enabled("quiet", "/tmp/", false);
        settings.set_header_format("[%S] ");
        settings.set_active_severity(Severity::Fatal);
        registry.build_with_settings(settings).unwrap();
        let logger = registry.get("quiet").unwrap();
        assert!(!logger.is_enabled());
        assert_eq!(logger.header_format(), "[%S] ");
        assert_eq!(logger.active_severity(), SeverityMask::ALL);
    }

    #[test]
    fn test_rebuild_after_destroy_is_a_new_logger() {
        let registry = Registry::new();
        registry.build("app", "/tmp/").unwrap();
        let old = registry.get("app").unwrap();
        old.set_enabled(false);
        registry.destroy("app").unwrap();
        registry.build("app", "/tmp/").unwrap();
        let new = registry.get("app").unwrap();
        assert!(!Arc::ptr_eq(&old, &new));
        assert!(new.is_enabled());
        assert!(!old.is_enabled());
    }
}
