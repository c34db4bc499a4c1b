//! Read-only queries against the server's PostgreSQL database.
//!
//! The connection pool is built explicitly from the loaded config, used for
//! one run, and closed by the caller. Nothing here writes to the database.

use log::{debug, info};
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::Row;

use crate::config::DbConfig;
use crate::errors::Result;
use crate::profile::{normalize_note, Field, Profile, Snapshot};

/// A user who has not confirmed their email address yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnconfirmedUser {
    pub username: String,
    pub email: String,
}

/// Open a pool for one run.
pub async fn connect(config: &DbConfig) -> Result<PgPool> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database);

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    info!(
        "connected to {}/{} as {}",
        config.host, config.database, config.user
    );
    Ok(pool)
}

/// Snapshot of every local, non-suspended account whose profile mentions a
/// URL, keyed by username in creation order.
///
/// The URL filter runs in-process rather than in SQL so it stays in one
/// place next to [`Profile::mentions_url`].
pub async fn accounts_with_urls(pool: &PgPool) -> Result<Snapshot> {
    let rows = sqlx::query(
        "SELECT username, note, fields \
         FROM accounts \
         WHERE domain IS NULL AND suspended_at IS NULL \
         ORDER BY created_at",
    )
    .fetch_all(pool)
    .await?;

    let total = rows.len();
    let mut snapshot = Snapshot::new();
    for row in rows {
        let username: String = row.try_get("username")?;
        let note: Option<String> = row.try_get("note")?;
        let fields: Option<Value> = row.try_get("fields")?;

        let profile = Profile {
            fields: parse_fields(fields),
            note: normalize_note(note),
        };
        if profile.mentions_url() {
            snapshot.insert(username, profile);
        }
    }

    debug!(
        "{} of {total} local accounts mention URLs in their profile",
        snapshot.len()
    );
    Ok(snapshot)
}

/// Users with no confirmed email, oldest signup first.
pub async fn unconfirmed_users(pool: &PgPool) -> Result<Vec<UnconfirmedUser>> {
    let rows = sqlx::query(
        "SELECT accounts.username, users.email \
         FROM users \
         JOIN accounts ON accounts.id = users.account_id \
         WHERE users.confirmed_at IS NULL \
         ORDER BY users.created_at",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            Ok(UnconfirmedUser {
                username: row.try_get("username")?,
                email: row.try_get("email")?,
            })
        })
        .collect()
}

/// Decode the upstream `fields` jsonb column: an array of objects carrying
/// at least `name` and `value`. Extra keys (`verified_at` and friends) are
/// dropped, as are entries that do not look like a field at all.
fn parse_fields(raw: Option<Value>) -> Vec<Field> {
    match raw {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}
