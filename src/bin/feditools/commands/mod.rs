pub mod unconfirmed_users;
pub mod user_changes;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use feditools::config::{self, DbConfig, CONFIG_FILE_NAME};

/// Connection options shared by every subcommand.
#[derive(Args)]
pub struct ConnectionArgs {
    /// Path to the connection config (default: ~/.feditools/config.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ConnectionArgs {
    pub fn load_config(&self) -> Result<DbConfig> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => config::tool_dir()?.join(CONFIG_FILE_NAME),
        };
        config::load_config(&path).context("failed to load the connection config")
    }
}
