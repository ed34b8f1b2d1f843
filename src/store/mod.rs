//! Append-only JSON verification log.
//!
//! The log is a single JSON array, pretty-printed with a 2-space indent.
//! Every append reads the whole file, adds one entry and rewrites it, so the
//! cost grows with the number of records. No handle is held between calls.
//!
//! There is no file locking. Two processes appending to the same file at
//! once can lose an entry or leave a torn file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::{DEFAULT_LOG_FILE, StoreError, VerificationRecord};

/// A verification log bound to one file path.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stamp `record` with the current local time and append it.
    ///
    /// Returns the record as written.
    ///
    /// # Errors
    ///
    /// `StoreError::Parse` if the existing file is not a JSON array (the file
    /// is left as it was), `StoreError::Io` if it cannot be read or written.
    pub fn append(&self, record: VerificationRecord) -> Result<VerificationRecord, StoreError> {
        self.append_at(record, Local::now().naive_local())
    }

    /// Like [`append`](Self::append) with an explicit clock reading.
    ///
    /// `verified_at` is kept to microseconds and is never earlier than the
    /// last entry's, so a clock that steps backwards still leaves the file
    /// ordered.
    pub fn append_at(
        &self,
        mut record: VerificationRecord,
        now: NaiveDateTime,
    ) -> Result<VerificationRecord, StoreError> {
        let mut entries = self.load()?;

        let now = now.trunc_subsecs(6);
        let stamp = match last_verified_at(&entries) {
            Some(last) if last > now => {
                log::warn!("clock is behind the last log entry ({last}); reusing its timestamp");
                last
            }
            _ => now,
        };
        record.verified_at = Some(stamp);

        entries.push(serde_json::to_value(&record).map_err(StoreError::Serialize)?);
        let text = serde_json::to_string_pretty(&entries).map_err(StoreError::Serialize)?;
        fs::write(&self.path, text).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        log::debug!(
            "appended {} record to {} ({} entries)",
            record.type_tag(),
            self.path.display(),
            entries.len()
        );
        Ok(record)
    }

    /// Read every record in file order. A missing file is an empty log.
    pub fn read_all(&self) -> Result<Vec<VerificationRecord>, StoreError> {
        self.read_entries()
    }

    /// Existing entries as raw JSON, so entries this crate does not know
    /// about are carried over unchanged.
    fn load(&self) -> Result<Vec<Value>, StoreError> {
        self.read_entries()
    }

    fn read_entries<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

fn last_verified_at(entries: &[Value]) -> Option<NaiveDateTime> {
    entries.iter().rev().find_map(|entry| {
        entry
            .get("verified_at")?
            .as_str()?
            .parse::<NaiveDateTime>()
            .ok()
    })
}
