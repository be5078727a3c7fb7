//! Node identifiers.
//!
//! Ids are short strings ("A".."Z" by default, custom ids allowed). All
//! tie-breaking in the engine is ascending lexicographic on these ids, so
//! the ordering here is byte order — stable and deterministic.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// A node identifier: a short, unique string such as `"A"` or `"S"`.
///
/// Ordering is lexicographic byte order, which the engine relies on for
/// deterministic tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// First unused single-letter id in `A..=Z`, or `None` if all 26 are taken.
///
/// Custom (multi-character or non-letter) ids never block a letter.
#[must_use]
pub fn next_unused_letter(existing: &BTreeSet<NodeId>) -> Option<NodeId> {
    ('A'..='Z')
        .map(|c| NodeId(c.to_string()))
        .find(|id| !existing.contains(id))
}
