//! Versioned JSON snapshot cache, one file per report.
//!
//! Each record on disk looks like `{"<key>": <snapshot>, "version": N}`.
//! The version is checked on load and any mismatch is fatal: there is no
//! migration path, so a report must never be produced from a cache layout
//! the current release does not understand.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use crate::errors::{Error, Result};
use crate::profile::Snapshot;

pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the cache file for a key.
    pub fn cache_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}_cache.json"))
    }

    /// Load the snapshot persisted under `key`.
    ///
    /// A missing file is the normal first-run state and yields an empty
    /// snapshot. A present file whose version differs from
    /// `expected_version` is a fatal [`Error::CacheVersionMismatch`].
    pub fn load(&self, key: &str, expected_version: u32) -> Result<Snapshot> {
        let path = self.cache_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "no {key} cache at {}, starting from an empty snapshot",
                    path.display()
                );
                return Ok(Snapshot::new());
            }
            Err(err) => return Err(err.into()),
        };

        let record: Value = serde_json::from_str(&raw).map_err(|err| malformed(&path, err))?;
        let found = record
            .get("version")
            .and_then(Value::as_u64)
            .ok_or_else(|| malformed(&path, "missing integer \"version\" field"))?;
        if found != u64::from(expected_version) {
            return Err(Error::CacheVersionMismatch {
                key: key.to_string(),
                expected: expected_version,
                found,
            });
        }

        let snapshot = record
            .get(key)
            .cloned()
            .ok_or_else(|| malformed(&path, format!("missing {key:?} record")))?;
        Ok(serde_json::from_value(snapshot).map_err(|err| malformed(&path, err))?)
    }

    /// Persist `snapshot` under `key`, replacing any previous record.
    ///
    /// The record is written to a temporary file in the cache directory and
    /// renamed into place, so a crash mid-write cannot truncate the last
    /// good snapshot.
    pub fn save(&self, key: &str, version: u32, snapshot: &Snapshot) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let mut record = serde_json::Map::new();
        record.insert(key.to_string(), serde_json::to_value(snapshot)?);
        record.insert("version".to_string(), Value::from(version));
        let data = serde_json::to_string_pretty(&Value::Object(record))?;

        let staging = self.dir.join(format!(".{key}_cache.json.tmp"));
        fs::write(&staging, data)?;
        fs::rename(&staging, self.cache_path(key))?;
        debug!("saved {} users to the {key} cache", snapshot.len());
        Ok(())
    }
}

fn malformed(path: &Path, reason: impl ToString) -> Error {
    Error::CacheMalformed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
