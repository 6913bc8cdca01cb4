//! # reglog
//! Registry of named, thread-safe file loggers with configurable record headers.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! reglog = "0.1.0"
//! ```
//!
//! ```rust
//! use reglog::{Registry, Severity};
//!
//! let registry = Registry::new();
//! registry.build("reglog_usage", "/tmp/").unwrap();
//!
//! let logger = registry.get("reglog_usage").unwrap();
//! logger.set_header_format("[%D{%Y-%m-%d %H:%M:%S:%q}][%S] - ");
//! logger.write(Severity::Info, file!(), "main", line!(), "Hello, world!").unwrap();
//!
//! let content = std::fs::read_to_string("/tmp/reglog_usage").unwrap();
//! assert!(content.ends_with("[info] - Hello, world!\n"));
//! ```
//!
//! ## Severities
//! Every logger starts with all severities active. Narrow or widen the set at any time;
//! records of an inactive severity are dropped and `write` returns `Ok(false)`.
//!
//! ```rust
//! use reglog::{Registry, Severity, reglog_debug, reglog_info};
//!
//! let registry = Registry::new();
//! registry.build("reglog_severities", "/tmp/").unwrap();
//! registry
//!     .get("reglog_severities")
//!     .unwrap()
//!     .set_active_severity(Severity::Info | Severity::Warning);
//!
//! assert!(!reglog_debug!(registry, "reglog_severities", "not written").unwrap());
//! assert!(reglog_info!(registry, "reglog_severities", "written").unwrap());
//! ```
//!
//! ## Multi-threaded logging
//! Records of one logger are serialized: concurrent writers never interleave lines.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use reglog::{Registry, reglog_info};
//!
//! let registry = Arc::new(Registry::new());
//! registry.build("reglog_threads", "/tmp/").unwrap();
//!
//! let handles: Vec<_> = (0..5).map(|i| {
//!     let registry = Arc::clone(&registry);
//!     std::thread::spawn(move || {
//!         reglog_info!(registry, "reglog_threads", "Hello, world from thread {i}!").unwrap();
//!     })
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! ```
//!
//! ## Header templates
//! See [`HeaderTemplate`] for the template language: `%D{...}` date blocks with
//! strftime conversions and `%q` for milliseconds, and `F`, `M`, `L`, `S` for the
//! call site file, function, line and the severity name.
//!
//! ## `log` crate
//! [`RegistryLog`] routes records of the `log` macros to one registered logger.

mod log_bridge;
mod logger;
mod macros;
mod registry;

pub use log_bridge::RegistryLog;
#[doc(hidden)]
pub use macros::__strip_function_name;
pub use logger::Logger;
pub use registry::Registry;
pub use reglog_core::{
    Error, ErrorKind, HeaderTemplate, MAX_NAME_LEN, RecordContext, Result, Settings, Severity,
    SeverityMask,
};
