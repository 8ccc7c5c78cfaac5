//! Flat-file persistence for student records.
//!
//! # Responsibility
//! - Convert records to and from the comma-joined line format.
//! - Read and overwrite the configured data file.
//!
//! # Invariants
//! - One record per line, four fields, no header, no quoting or escaping.
//! - Malformed lines are skipped on parse, never reported as errors.
//! - A missing data file loads as an empty collection.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub mod line_codec;
mod record_file;

pub use record_file::RecordFile;

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// I/O failure while reading or writing the data file.
#[derive(Debug)]
pub enum PersistenceError {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl PersistenceError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}
