use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type returned by the feditools library.
#[derive(Debug, Error)]
pub enum Error {
    /// A persisted cache was written by a different release of the tool.
    /// There is no migration path, so the run must abort before reporting
    /// anything derived from data we do not understand.
    #[error("unknown {key} cache version: expected {expected}, got {found}")]
    CacheVersionMismatch {
        key: String,
        expected: u32,
        found: u64,
    },

    /// A cache file exists but does not have the expected record layout.
    #[error("malformed cache file {path}: {reason}")]
    CacheMalformed { path: PathBuf, reason: String },

    /// The connection config is missing or cannot be parsed.
    #[error("invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    /// Underlying database query or connection failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
