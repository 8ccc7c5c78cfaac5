//! Session configuration.
//!
//! # Responsibility
//! - Carry the data file path, logging options and login credentials.
//! - Provide defaults that callers override field by field.

use crate::auth::LoginGate;
use crate::codec::RecordFile;
use crate::logging::default_log_level;
use std::path::PathBuf;

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "students.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Path of the comma-joined record file.
    pub data_file: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute log directory. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    pub credentials: LoginGate,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: default_log_level().to_string(),
            log_dir: None,
            credentials: LoginGate::default(),
        }
    }
}

impl RosterConfig {
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Data file binding for the configured path.
    pub fn record_file(&self) -> RecordFile {
        RecordFile::new(self.data_file.clone())
    }
}
