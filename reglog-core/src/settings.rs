use std::path::PathBuf;

use crate::severity::SeverityMask;

/// Per-logger configuration.
///
/// A plain value: nothing here is validated. Name checks happen when the
/// settings are handed to a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    name: String,
    path: String,
    enabled: bool,
    header_format: String,
    active_severity: SeverityMask,
}

impl Settings {
    /// Enabled settings with an empty header and no active severity.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_enabled(name, path, true)
    }

    pub fn with_enabled(name: impl Into<String>, path: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            enabled,
            header_format: String::new(),
            active_severity: SeverityMask::NONE,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `path` followed by `name`. The two are concatenated as strings, so
    /// `path` must already end with a separator.
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.path, self.name))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn header_format(&self) -> &str {
        &self.header_format
    }

    pub fn set_header_format(&mut self, header_format: impl Into<String>) {
        self.header_format = header_format.into();
    }

    pub fn active_severity(&self) -> SeverityMask {
        self.active_severity
    }

    pub fn set_active_severity(&mut self, mask: impl Into<SeverityMask>) {
        self.active_severity = mask.into();
    }
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::new("app", "/tmp/");
    assert_eq!(settings.name(), "app");
    assert_eq!(settings.path(), "/tmp/");
    assert!(settings.is_enabled());
    assert_eq!(settings.header_format(), "");
    assert!(settings.active_severity().is_empty());
    assert_eq!(settings.file_path(), PathBuf::from("/tmp/app"));
}

#[test]
fn test_file_path_is_concatenated() {
    let settings = Settings::with_enabled("app.log", "/var/tmp/my_", false);
    assert_eq!(settings.file_path(), PathBuf::from("/var/tmp/my_app.log"));
    assert!(!settings.is_enabled());
}
