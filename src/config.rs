//! Connection settings for the server's database.
//!
//! A JSON file, by default `~/.feditools/config.json`:
//!
//! ```json
//! {"host": "localhost", "database": "mastodon", "user": "...", "password": "...", "port": 5432}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Directory under the home dir holding the config file and the snapshot
/// caches.
pub const TOOL_DIR_NAME: &str = ".feditools";

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    5432
}

/// Resolve `~/.feditools`.
pub fn tool_dir() -> Result<PathBuf> {
    let base = BaseDirs::new().ok_or_else(|| Error::ConfigInvalid {
        path: PathBuf::from(TOOL_DIR_NAME),
        reason: "cannot determine the home directory".to_string(),
    })?;
    Ok(base.home_dir().join(TOOL_DIR_NAME))
}

/// Load and parse the config file. Missing and malformed files are both
/// fatal: every report needs the database.
pub fn load_config(path: &Path) -> Result<DbConfig> {
    let raw = fs::read_to_string(path).map_err(|err| invalid(path, err))?;
    serde_json::from_str(&raw).map_err(|err| invalid(path, err))
}

fn invalid(path: &Path, reason: impl ToString) -> Error {
    Error::ConfigInvalid {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
