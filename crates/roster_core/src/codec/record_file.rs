//! Data file access.
//!
//! # Responsibility
//! - Load records from the configured path at startup.
//! - Overwrite the configured path on explicit save.
//!
//! # Invariants
//! - Absence of the file is not an error.
//! - Save writes the full collection; nothing is appended.

use super::line_codec::{parse, serialize};
use super::{PersistenceError, PersistenceResult};
use crate::model::record::{Record, RecordFields};
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Data file bound to one configured path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    path: PathBuf,
}

impl RecordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the data file.
    ///
    /// Returns an empty list when the file does not exist.
    ///
    /// # Errors
    /// - `PersistenceError::Read` when the file exists but cannot be read.
    pub fn load(&self) -> PersistenceResult<Vec<RecordFields>> {
        let started_at = Instant::now();
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=data_load module=codec status=ok file_present=false count=0");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=data_load module=codec status=error duration_ms={} error_code=read_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        let parsed = parse(&contents);
        info!(
            "event=data_load module=codec status=ok file_present=true count={} skipped={} duration_ms={}",
            parsed.records.len(),
            parsed.skipped_lines,
            started_at.elapsed().as_millis()
        );
        Ok(parsed.records)
    }

    /// Serializes `records` and overwrites the data file.
    ///
    /// Returns the number of records written.
    ///
    /// # Errors
    /// - `PersistenceError::Write` when the file cannot be created or written.
    pub fn save(&self, records: &[Record]) -> PersistenceResult<usize> {
        let started_at = Instant::now();
        match fs::write(&self.path, serialize(records)) {
            Ok(()) => {
                info!(
                    "event=data_save module=codec status=ok count={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(records.len())
            }
            Err(err) => {
                error!(
                    "event=data_save module=codec status=error duration_ms={} error_code=write_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(PersistenceError::Write {
                    path: self.path.clone(),
                    source: err,
                })
            }
        }
    }
}
