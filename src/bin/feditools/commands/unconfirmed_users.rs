//! List users who have not confirmed their email address yet.

use anyhow::{Context, Result};
use clap::Args;

use feditools::db;

use super::ConnectionArgs;
use crate::output::OutputManager;

#[derive(Args)]
pub struct UnconfirmedUsersArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn handle_unconfirmed_users(
    args: UnconfirmedUsersArgs,
    output: &OutputManager,
) -> Result<()> {
    let config = args.connection.load_config()?;
    output.status("connecting to the database...");
    let pool = db::connect(&config)
        .await
        .context("failed to connect to the database")?;

    let users = db::unconfirmed_users(&pool)
        .await
        .context("failed to query unconfirmed users")?;
    for user in users {
        println!("{} <{}>", user.username, user.email);
    }

    pool.close().await;
    Ok(())
}
