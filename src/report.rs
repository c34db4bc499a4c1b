//! Render user-change events as human-readable report paragraphs.
//!
//! Each renderer produces the lines of one paragraph: a header naming the
//! user, a ` fields:` section from the field differ, and a ` note:` section
//! from the note differ. The caller prints one blank line after each
//! paragraph; keeping that out of the line sequence keeps the renderers
//! trivially composable and testable.

use crate::differ::{diff_fields, diff_note};
use crate::profile::Profile;
use crate::reconcile::UserChange;

/// Render any change event as its report paragraph.
pub fn render_change(change: &UserChange) -> impl Iterator<Item = String> {
    let lines: Vec<String> = match change {
        UserChange::New { username, profile } => render_new_user(username, profile).collect(),
        UserChange::Changed { username, old, new } => {
            render_changed_user(username, old, new).collect()
        }
        UserChange::Deleted { username, profile } => {
            render_deleted_user(username, profile).collect()
        }
    };
    lines.into_iter()
}

/// A user present now but not in the previous snapshot: everything they
/// have is an addition.
pub fn render_new_user(username: &str, profile: &Profile) -> impl Iterator<Item = String> {
    render_user(
        format!("New user: {username}"),
        &Profile::new(vec![], None),
        profile,
    )
}

/// A user present in both snapshots with an unequal profile.
pub fn render_changed_user(
    username: &str,
    old: &Profile,
    new: &Profile,
) -> impl Iterator<Item = String> {
    render_user(format!("Changed user: {username}"), old, new)
}

/// A user present in the previous snapshot but gone now: everything they
/// had is a removal.
pub fn render_deleted_user(username: &str, profile: &Profile) -> impl Iterator<Item = String> {
    render_user(
        format!("Deleted user: {username}"),
        profile,
        &Profile::new(vec![], None),
    )
}

fn render_user(header: String, old: &Profile, new: &Profile) -> impl Iterator<Item = String> {
    let mut lines = vec![header, " fields:".to_string()];
    lines.extend(diff_fields(&old.fields, &new.fields));
    lines.push(" note:".to_string());
    lines.extend(diff_note(old.note.as_deref(), new.note.as_deref()));
    lines.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Field;

    fn collect(lines: impl Iterator<Item = String>) -> String {
        lines.collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn new_user_shows_everything_as_added() {
        let profile = Profile::new(
            vec![Field::new("likes", "puppies, infosec")],
            Some("I'm new.".to_string()),
        );

        assert_eq!(
            collect(render_new_user("newuser", &profile)),
            "New user: newuser\n \
             fields:\n  \
             + \"likes\": \"puppies, infosec\"\n \
             note:\n  \
             + \"I'm new.\""
        );
    }

    #[test]
    fn new_user_without_fields_or_note_shows_none_markers() {
        let profile = Profile::new(vec![], None);

        assert_eq!(
            collect(render_new_user("quiet", &profile)),
            "New user: quiet\n fields:\n  <none>\n note:\n  <none>"
        );
    }

    #[test]
    fn changed_user_diffs_both_sections() {
        let old = Profile::new(vec![], Some("i just got here".to_string()));
        let new = Profile::new(
            vec![Field::new("likes", "puppies, infosec")],
            Some("hack the planet".to_string()),
        );

        assert_eq!(
            collect(render_changed_user("activeuser", &old, &new)),
            "Changed user: activeuser\n \
             fields:\n  \
             + \"likes\": \"puppies, infosec\"\n \
             note:\n  \
             - \"i just got here\"\n  \
             + \"hack the planet\""
        );
    }

    #[test]
    fn changed_user_with_one_unchanged_dimension_says_so() {
        let old = Profile::new(
            vec![Field::new("site", "http://x")],
            Some("old note".to_string()),
        );
        let new = Profile::new(
            vec![Field::new("site", "http://x")],
            Some("new note".to_string()),
        );

        assert_eq!(
            collect(render_changed_user("tinkerer", &old, &new)),
            "Changed user: tinkerer\n \
             fields:\n  \
             <unchanged>\n \
             note:\n  \
             - \"old note\"\n  \
             + \"new note\""
        );
    }

    #[test]
    fn deleted_user_shows_everything_as_removed() {
        let profile = Profile::new(
            vec![Field::new(
                "support",
                "https://example.com/send-me-cash",
            )],
            Some("Send me your money!".to_string()),
        );

        assert_eq!(
            collect(render_deleted_user("spammer", &profile)),
            "Deleted user: spammer\n \
             fields:\n  \
             - \"support\": \"https://example.com/send-me-cash\"\n \
             note:\n  \
             - \"Send me your money!\""
        );
    }
}
