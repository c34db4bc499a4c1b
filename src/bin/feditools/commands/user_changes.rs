//! The user-changes report: diff the current set of local accounts that
//! mention URLs in their profile against the previous run's snapshot.
//!
//! Spammers love stuffing their crummy website into every profile field
//! they can reach. Run this hourly and mail yourself the output (usually
//! empty) and you can catch the "https://support-foo-corp/" crowd before
//! they post anything.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use feditools::cache::CacheStore;
use feditools::config;
use feditools::db;
use feditools::reconcile::reconcile;
use feditools::report::render_change;

use super::ConnectionArgs;
use crate::output::OutputManager;

pub const CACHE_KEY: &str = "users";
pub const CACHE_VERSION: u32 = 1;

#[derive(Args)]
pub struct UserChangesArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Directory holding snapshot caches (default: ~/.feditools)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

pub async fn handle_user_changes(args: UserChangesArgs, output: &OutputManager) -> Result<()> {
    let cache_dir = match args.cache_dir {
        Some(dir) => dir,
        None => config::tool_dir()?,
    };
    let store = CacheStore::new(cache_dir);

    let config = args.connection.load_config()?;
    output.status("connecting to the database...");
    let pool = db::connect(&config)
        .await
        .context("failed to connect to the database")?;

    // The cache is read before any report is produced, so a version
    // mismatch aborts the run without printing a diff against data we
    // misread.
    let previous = store
        .load(CACHE_KEY, CACHE_VERSION)
        .context("failed to load the previous snapshot")?;
    let current = db::accounts_with_urls(&pool)
        .await
        .context("failed to query the current accounts")?;

    for change in reconcile(&previous, &current) {
        for line in render_change(&change) {
            println!("{line}");
        }
        println!();
    }

    // Only a fully successful run replaces the snapshot; any failure above
    // leaves the previous cache file in place for the next attempt.
    store
        .save(CACHE_KEY, CACHE_VERSION, &current)
        .context("failed to save the new snapshot")?;

    pool.close().await;
    Ok(())
}
