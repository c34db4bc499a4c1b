//! The reportable bio state of an account: a free-text note plus an
//! unordered collection of name/value fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One name/value pair from an account's bio.
///
/// Upstream does not require names to be unique, so a collection of fields
/// is a multiset of pairs rather than a map. The derived ordering (name,
/// then value) is the display order used throughout the differ.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A user's reportable bio state at one point in time.
///
/// `note` is normalized on the way in: the upstream `note` column is a
/// non-null text column where the empty string means "no note", so both
/// states collapse to `None` here. The cache format writes it back as `""`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, with = "note_repr")]
    pub note: Option<String>,
}

impl Profile {
    pub fn new(fields: Vec<Field>, note: Option<String>) -> Self {
        Self {
            fields,
            note: normalize_note(note),
        }
    }

    /// True if the note or any field mentions a URL. The check is the same
    /// deliberately crude substring match the report has always used:
    /// spammers do not bother with exotic URL encodings.
    pub fn mentions_url(&self) -> bool {
        if let Some(note) = &self.note {
            if note.to_lowercase().contains("http") {
                return true;
            }
        }
        self.fields.iter().any(|field| {
            field.name.to_lowercase().contains("http")
                || field.value.to_lowercase().contains("http")
        })
    }
}

/// Equality for change detection is exact: notes must match and the field
/// collections must be equal as multisets, duplicate counts included. This
/// is stricter than the set equality the field differ uses for its
/// `<unchanged>` marker, so a profile can be flagged as changed while its
/// rendered fields section still reads `<unchanged>`. That mismatch is
/// long-standing observed behavior and is kept on purpose.
impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.note == other.note && multiset_eq(&self.fields, &other.fields)
    }
}

impl Eq for Profile {}

fn multiset_eq(a: &[Field], b: &[Field]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&Field> = a.iter().collect();
    let mut b: Vec<&Field> = b.iter().collect();
    a.sort();
    b.sort();
    a == b
}

/// Collapse the "no note" states to `None`.
pub fn normalize_note(raw: Option<String>) -> Option<String> {
    raw.filter(|note| !note.is_empty())
}

/// Username -> profile for every in-scope user, in the order the data
/// source returned them (creation time ascending). The order is preserved
/// through cache round trips so reports stay deterministic.
pub type Snapshot = IndexMap<String, Profile>;

/// Serialize the note the way the cache file has always stored it: a plain
/// string, `""` when absent. Deserialization accepts null or a string and
/// normalizes.
mod note_repr {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(note: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(note.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(super::normalize_note(raw))
    }
}
