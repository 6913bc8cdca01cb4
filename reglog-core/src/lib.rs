//! # reglog-core
//! Core types for reglog - severities, settings, header templates and the record file.

mod config;
mod error;
mod header;
mod log_file;
mod settings;
mod severity;

pub use config::{REGLOG_CONFIG, ReglogConfig};
pub use error::{Error, ErrorKind, Result};
pub use header::{HeaderTemplate, RecordContext};
pub use log_file::LogFile;
pub use settings::Settings;
pub use severity::{Severity, SeverityMask};

/// Longest accepted logger name, in bytes.
pub const MAX_NAME_LEN: usize = 254;
