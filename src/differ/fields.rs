//! Ordered display diff between two collections of bio fields.

use std::collections::BTreeSet;

use crate::profile::Field;

/// Diff two field collections into display lines.
///
/// The two sides are compared as *sets* of `(name, value)` pairs: ordering
/// and duplicate counts are ignored, and a pair whose name survives with a
/// new value shows up as one removal plus one addition (a field has no
/// identity beyond the pair itself). Removed pairs come first, then
/// unchanged pairs as unprefixed context, then added pairs, each group in
/// ascending `(name, value)` order.
pub fn diff_fields(old: &[Field], new: &[Field]) -> impl Iterator<Item = String> {
    field_change_lines(old, new).into_iter()
}

fn field_change_lines(old: &[Field], new: &[Field]) -> Vec<String> {
    if old.is_empty() && new.is_empty() {
        return vec!["  <none>".to_string()];
    }

    let old_set: BTreeSet<(&str, &str)> = pairs(old);
    let new_set: BTreeSet<(&str, &str)> = pairs(new);

    // Set equality on purpose: reordering fields or repeating an identical
    // pair is not worth a line of report.
    if old_set == new_set {
        return vec!["  <unchanged>".to_string()];
    }

    let mut lines = Vec::new();
    for (name, value) in old_set.difference(&new_set) {
        lines.push(format!("  - {name:?}: {value:?}"));
    }
    for (name, value) in old_set.intersection(&new_set) {
        lines.push(format!("    {name:?}: {value:?}"));
    }
    for (name, value) in new_set.difference(&old_set) {
        lines.push(format!("  + {name:?}: {value:?}"));
    }
    lines
}

fn pairs(fields: &[Field]) -> BTreeSet<(&str, &str)> {
    fields
        .iter()
        .map(|field| (field.name.as_str(), field.value.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, value: &str) -> Field {
        Field::new(name, value)
    }

    fn lines(old: &[Field], new: &[Field]) -> Vec<String> {
        diff_fields(old, new).collect()
    }

    #[test]
    fn both_empty_is_a_single_none_marker() {
        assert_eq!(lines(&[], &[]), ["  <none>"]);
    }

    #[test]
    fn identical_sides_are_unchanged() {
        let fields = [field("site", "http://x"), field("likes", "puppies")];
        assert_eq!(lines(&fields, &fields), ["  <unchanged>"]);
    }

    #[test]
    fn unchanged_ignores_order_and_duplicate_counts() {
        let old = [field("a", "1"), field("b", "2")];
        let reordered = [field("b", "2"), field("a", "1")];
        assert_eq!(lines(&old, &reordered), ["  <unchanged>"]);

        let duplicated = [field("a", "1"), field("a", "1"), field("b", "2")];
        assert_eq!(lines(&old, &duplicated), ["  <unchanged>"]);
    }

    #[test]
    fn groups_are_emitted_removed_then_kept_then_added() {
        let old = [
            field("one", "A"),
            field("two", "B"),
            field("two", "C"),
            field("three", "D"),
        ];
        let new = [
            field("uno", "A"),
            field("two", "B"),
            field("three", "D"),
            field("three", "E"),
            field("four", "F"),
        ];

        assert_eq!(
            lines(&old, &new),
            [
                r#"  - "one": "A""#,
                r#"  - "two": "C""#,
                r#"    "three": "D""#,
                r#"    "two": "B""#,
                r#"  + "four": "F""#,
                r#"  + "three": "E""#,
                r#"  + "uno": "A""#,
            ]
        );
    }

    #[test]
    fn value_change_is_a_removal_plus_an_addition() {
        let old = [field("site", "http://old.example")];
        let new = [field("site", "http://new.example")];

        assert_eq!(
            lines(&old, &new),
            [
                r#"  - "site": "http://old.example""#,
                r#"  + "site": "http://new.example""#,
            ]
        );
    }

    #[test]
    fn one_empty_side_prefixes_everything() {
        let fields = [field("b", "2"), field("a", "1")];

        assert_eq!(
            lines(&[], &fields),
            [r#"  + "a": "1""#, r#"  + "b": "2""#]
        );
        assert_eq!(
            lines(&fields, &[]),
            [r#"  - "a": "1""#, r#"  - "b": "2""#]
        );
    }

    #[test]
    fn embedded_newlines_never_produce_extra_lines() {
        let old = [field("bio", "line one\nline two")];
        let out = lines(&old, &[]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0], "  - \"bio\": \"line one\\nline two\"");
    }
}
