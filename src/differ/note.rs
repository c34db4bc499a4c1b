//! Display diff between two versions of a bio note.

/// Diff two optional notes into display lines.
///
/// An absent note and an empty note are the same state. When the note
/// changed, the full old and new texts are shown rather than a line-level
/// diff: notes are short, and the reader wants the whole thing anyway.
pub fn diff_note(old: Option<&str>, new: Option<&str>) -> impl Iterator<Item = String> {
    note_change_lines(old, new).into_iter()
}

fn note_change_lines(old: Option<&str>, new: Option<&str>) -> Vec<String> {
    // Inputs are normalized at the boundary, but tolerate "" here too.
    let old = old.filter(|note| !note.is_empty());
    let new = new.filter(|note| !note.is_empty());

    if old.is_none() && new.is_none() {
        return vec!["  <none>".to_string()];
    }
    if old == new {
        return vec!["  <unchanged>".to_string()];
    }

    let mut lines = Vec::new();
    if let Some(old) = old {
        lines.push(format!("  - {old:?}"));
    }
    if let Some(new) = new {
        lines.push(format!("  + {new:?}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(old: Option<&str>, new: Option<&str>) -> Vec<String> {
        diff_note(old, new).collect()
    }

    #[test]
    fn both_absent_is_a_single_none_marker() {
        assert_eq!(lines(None, None), ["  <none>"]);
        // empty string and absent are the same state
        assert_eq!(lines(Some(""), Some("")), ["  <none>"]);
        assert_eq!(lines(None, Some("")), ["  <none>"]);
    }

    #[test]
    fn equal_notes_are_unchanged() {
        assert_eq!(lines(Some("hi"), Some("hi")), ["  <unchanged>"]);
    }

    #[test]
    fn changed_note_shows_both_texts() {
        assert_eq!(
            lines(Some("old"), Some("new")),
            [r#"  - "old""#, r#"  + "new""#]
        );
    }

    #[test]
    fn added_note_shows_only_the_addition() {
        assert_eq!(lines(None, Some("new")), [r#"  + "new""#]);
        assert_eq!(lines(Some(""), Some("new")), [r#"  + "new""#]);
    }

    #[test]
    fn removed_note_shows_only_the_removal() {
        assert_eq!(lines(Some("old"), None), [r#"  - "old""#]);
        assert_eq!(lines(Some("old"), Some("")), [r#"  - "old""#]);
    }

    #[test]
    fn control_characters_are_escaped() {
        let crafted = "Subject: you won\r\nBcc: everyone";
        let out = lines(None, Some(crafted));

        assert_eq!(out.len(), 1);
        assert!(!out[0].contains('\r'));
        assert!(!out[0].contains('\n'));
        assert_eq!(out[0], "  + \"Subject: you won\\r\\nBcc: everyone\"");
    }
}
