//! Admin reporting tools for Mastodon-compatible servers.
//!
//! The library half of feditools: the profile/snapshot data model, the
//! versioned snapshot cache, the field and note differs, the report
//! renderer, snapshot reconciliation, and the read-only database queries
//! the reports are built from. The `feditools` binary is a thin clap
//! front-end over these modules.

pub mod cache;
pub mod config;
pub mod db;
pub mod differ;
pub mod errors;
pub mod profile;
pub mod reconcile;
pub mod report;

pub use errors::{Error, Result};
