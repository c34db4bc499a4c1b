//! Classify every user as new, changed, deleted, or unchanged by comparing
//! the previous snapshot against the current one.

use std::collections::HashSet;

use log::debug;

use crate::profile::{Profile, Snapshot};

/// One reportable difference between two snapshots. Unchanged users emit
/// no event at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserChange {
    New {
        username: String,
        profile: Profile,
    },
    Changed {
        username: String,
        old: Profile,
        new: Profile,
    },
    Deleted {
        username: String,
        profile: Profile,
    },
}

impl UserChange {
    pub fn username(&self) -> &str {
        match self {
            UserChange::New { username, .. }
            | UserChange::Changed { username, .. }
            | UserChange::Deleted { username, .. } => username,
        }
    }
}

/// Reconcile the previous snapshot against the current one.
///
/// Two phases: walk the current snapshot in data-source order, crossing
/// matched usernames off the set of previous usernames and emitting `New`
/// or `Changed` events; then walk the previous snapshot and emit `Deleted`
/// for every username still uncrossed. Equality is [`Profile`]'s strict
/// multiset equality, so a duplicated-field-only change produces a
/// `Changed` event even though the rendered fields section will read
/// `<unchanged>`.
pub fn reconcile(previous: &Snapshot, current: &Snapshot) -> Vec<UserChange> {
    let mut pending: HashSet<&str> = previous.keys().map(String::as_str).collect();
    let mut events = Vec::new();

    for (username, new_profile) in current {
        match previous.get(username) {
            Some(old_profile) => {
                pending.remove(username.as_str());
                if old_profile != new_profile {
                    events.push(UserChange::Changed {
                        username: username.clone(),
                        old: old_profile.clone(),
                        new: new_profile.clone(),
                    });
                }
            }
            None => {
                events.push(UserChange::New {
                    username: username.clone(),
                    profile: new_profile.clone(),
                });
            }
        }
    }

    // Whoever is left in the previous snapshot disappeared from the query
    // results, most likely through suspension or deletion.
    for (username, old_profile) in previous {
        if pending.contains(username.as_str()) {
            events.push(UserChange::Deleted {
                username: username.clone(),
                profile: old_profile.clone(),
            });
        }
    }

    debug!(
        "reconciled {} previous and {} current users into {} events",
        previous.len(),
        current.len(),
        events.len()
    );
    events
}
