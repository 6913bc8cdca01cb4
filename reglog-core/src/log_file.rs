use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    config::REGLOG_CONFIG,
    error::{Error, Result},
};

/// Append-only record file.
///
/// Nothing is kept open between records: every [`append`](LogFile::append)
/// opens the file, writes one line and closes it again, so a crash never
/// loses a record that was already appended.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
    sync_on_write: bool,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sync_on_write: REGLOG_CONFIG.SYNC_ON_WRITE,
        }
    }

    pub fn with_sync_on_write(self, sync_on_write: bool) -> Self {
        Self {
            sync_on_write,
            ..self
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `header`, `message` and a newline as one record. The file is
    /// created if it does not exist; its directory is not.
    pub fn append(&self, header: &str, message: &str) -> Result<()> {
        let mut file = File::options()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| Error::OpenFailed {
                path: self.path.clone(),
                source,
            })?;
        let mut record = String::with_capacity(header.len() + message.len() + 1);
        record.push_str(header);
        record.push_str(message);
        record.push('\n');
        file.write_all(record.as_bytes())
            .and_then(|()| {
                if self.sync_on_write {
                    file.sync_data()
                } else {
                    Ok(())
                }
            })
            .map_err(|source| Error::WriteFailed {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = LogFile::new(dir.path().join("records"));
        log_file.append("[info] ", "Hello, world!").unwrap();
        log_file.append("", "rust is awesome !").unwrap();
        assert_eq!(
            std::fs::read_to_string(log_file.path()).unwrap(),
            "[info] Hello, world!\nrust is awesome !\n"
        );
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records");
        std::fs::write(&path, "previous run\n").unwrap();
        LogFile::new(&path)
            .with_sync_on_write(true)
            .append("", "next run")
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "previous run\nnext run\n"
        );
    }

    #[test]
    fn test_missing_directory_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("records");
        let err = LogFile::new(&path).append("", "lost").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(matches!(err, Error::OpenFailed { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_directory_as_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let err = LogFile::new(dir.path()).append("", "lost").unwrap_err();
        assert!(matches!(err, Error::OpenFailed { .. }));
    }
}
