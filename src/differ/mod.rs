//! Display diffs between two versions of a profile.
//!
//! Both differs produce a finite sequence of indented display lines and are
//! pure functions of their inputs, so a sequence can be recomputed at will.
//! All literal text from the bio is rendered `{:?}`-escaped: report output
//! is routinely pasted into email digests, and escaping keeps crafted notes
//! from smuggling extra lines or headers into them.

mod fields;
mod note;

pub use fields::diff_fields;
pub use note::diff_note;
